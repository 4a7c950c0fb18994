/// Suffix the extraction stage appends to a format key to mark an externalized payload.
pub const FILENAME_SUFFIX: &str = "_filename";

/// Key under which an output records the file its `format` payload was written to.
pub fn filename_key(format: &str) -> String {
    format!("{format}{FILENAME_SUFFIX}")
}

/// Strip everything from the last `.` of `filename`.
///
/// A name without a dot loses its final character (`"noext"` becomes `"noex"`),
/// the same result a slice ending at index -1 gives.
pub fn figure_name(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => {
            let end = filename
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            log::warn!("figure filename {filename:?} has no extension, truncating to {:?}", &filename[..end]);
            &filename[..end]
        }
    }
}

/// File extension for a format key.
///
/// Bare keys (`"png"`, `"pdf"`) are their own extension. MIME types use their
/// subtype without any structured-syntax suffix, so `"image/svg+xml"` maps to `"svg"`.
pub fn extension(format: &str) -> &str {
    let subtype = match format.rfind('/') {
        Some(slash) => &format[slash + 1..],
        None => format,
    };
    match subtype.find('+') {
        Some(plus) => &subtype[..plus],
        None => subtype,
    }
}

/// File name a figure gets once it is available in `to_format`.
pub fn target_filename(figure_name: &str, to_format: &str) -> String {
    format!("{figure_name}.{}", extension(to_format))
}
