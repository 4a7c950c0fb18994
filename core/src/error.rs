use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("figure conversion from {0} is not implemented")]
    NotImplemented(String),

    #[error("failed to convert {format} figure: {message}")]
    Conversion { format: String, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("stage {stage} failed on cell {cell_index}: {source}")]
    Stage {
        stage: String,
        cell_index: usize,
        source: Box<TransformError>,
    },
}

impl TransformError {
    /// Build a conversion failure for a strategy that could not handle `format`.
    pub fn conversion(format: &str, message: impl Into<String>) -> Self {
        TransformError::Conversion {
            format: format.to_string(),
            message: message.into(),
        }
    }
}
