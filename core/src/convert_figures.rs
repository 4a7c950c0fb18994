//! Stage that converts extracted figure outputs from one format to another.
//!
//! Only outputs an extraction stage has already marked with a
//! `<from_format>_filename` key are touched. The converted figure is stored in
//! `resources.figures` under `<figure name>.<to_format extension>` and the
//! output gains a matching `<to_format>_filename` marker.

use crate::config::ConvertFiguresConfig;
use crate::converter::{FigureConverter, Unimplemented};
use crate::error::TransformError;
use crate::format::{figure_name, target_filename};
use crate::notebook::{Cell, Output, Payload, Resources};
use crate::transformer::Transformer;

pub struct ConvertFigures<C: FigureConverter = Unimplemented> {
    config: ConvertFiguresConfig,
    converter: C,
}

impl ConvertFigures<Unimplemented> {
    /// A stage with no conversion strategy. Any eligible figure fails with
    /// [`TransformError::NotImplemented`].
    pub fn unconfigured(config: ConvertFiguresConfig) -> Self {
        Self::new(config, Unimplemented)
    }
}

impl<C: FigureConverter> ConvertFigures<C> {
    pub fn new(config: ConvertFiguresConfig, converter: C) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &ConvertFiguresConfig {
        &self.config
    }

    pub fn convert_figure(&self, source_format: &str, data: &Payload) -> Result<Payload, TransformError> {
        self.converter.convert_figure(source_format, data)
    }

    fn convert_output_figure(
        &self,
        output: &mut Output,
        figure_name: &str,
        resources: &mut Resources,
        format: &str,
        data: &Payload,
    ) -> Result<(), TransformError> {
        let to_format = self.config.to_format.as_str();

        if output.contains_key(to_format) || output.filename(to_format).is_some() {
            log::trace!("output already has {to_format}, skipping");
            return Ok(());
        }
        if format != self.config.from_format {
            return Ok(());
        }

        let filename = target_filename(figure_name, to_format);
        if resources.has_figure(&filename) {
            log::trace!("{filename} already produced, skipping");
            return Ok(());
        }

        // Convert before touching anything so a failure leaves both structures as they were.
        let converted = self.convert_figure(format, data)?;
        log::debug!("converted {format} figure {figure_name} to {filename}");
        output.set_filename(to_format, filename.as_str());
        resources.add_figure(filename, converted);
        Ok(())
    }
}

impl<C: FigureConverter> Transformer for ConvertFigures<C> {
    fn name(&self) -> &str {
        "convert_figures"
    }

    fn transform_cell(
        &self,
        cell: &mut Cell,
        resources: &mut Resources,
        _cell_index: usize,
    ) -> Result<(), TransformError> {
        for output in cell.outputs.iter_mut() {
            let extracted: Vec<(String, String, Payload)> = output
                .entries()
                .filter_map(|(format, data)| {
                    let filename = output.filename(format)?;
                    Some((format.to_string(), figure_name(filename).to_string(), data.clone()))
                })
                .collect();

            for (format, name, data) in extracted {
                self.convert_output_figure(output, &name, resources, &format, &data)?;
            }
        }
        Ok(())
    }
}
