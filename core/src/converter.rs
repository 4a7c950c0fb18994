use crate::error::TransformError;
use crate::notebook::Payload;

/// Turns a figure payload in `source_format` into the stage's target format.
///
/// Callers treat implementations as pure: same input, same output.
pub trait FigureConverter: Send + Sync {
    fn convert_figure(&self, source_format: &str, data: &Payload) -> Result<Payload, TransformError>;
}

impl<F> FigureConverter for F
where
    F: Fn(&str, &Payload) -> Result<Payload, TransformError> + Send + Sync,
{
    fn convert_figure(&self, source_format: &str, data: &Payload) -> Result<Payload, TransformError> {
        self(source_format, data)
    }
}

/// Placeholder strategy for a stage nobody has given a real converter yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unimplemented;

impl FigureConverter for Unimplemented {
    fn convert_figure(&self, source_format: &str, _data: &Payload) -> Result<Payload, TransformError> {
        Err(TransformError::NotImplemented(source_format.to_string()))
    }
}
