//! Figure format conversion stage for notebook conversion pipelines.
//!
//! An upstream extraction stage writes figure payloads out to named files and
//! marks each output with a `<format>_filename` key. [`ConvertFigures`] picks
//! up those marked outputs and produces the same figure in another format
//! through a pluggable [`FigureConverter`].

pub mod config;
pub mod convert_figures;
pub mod converter;
pub mod error;
pub mod format;
pub mod notebook;
pub mod pipeline;
pub mod transformer;

pub use config::ConvertFiguresConfig;
pub use convert_figures::ConvertFigures;
pub use converter::{FigureConverter, Unimplemented};
pub use error::TransformError;
pub use notebook::{Cell, Output, Payload, Resources};
pub use pipeline::Pipeline;
pub use transformer::Transformer;
