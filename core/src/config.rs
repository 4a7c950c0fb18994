use serde::{Deserialize, Serialize};

use crate::error::TransformError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertFiguresConfig {
    /// Format the converter accepts, e.g. `application/pdf`
    #[serde(default)]
    pub from_format: String,
    /// Format the converter writes, e.g. `image/png`
    #[serde(default)]
    pub to_format: String,
}

impl ConvertFiguresConfig {
    /// Unchecked constructor. Empty formats are kept and simply never match.
    pub fn new(from_format: impl Into<String>, to_format: impl Into<String>) -> Self {
        Self {
            from_format: from_format.into(),
            to_format: to_format.into(),
        }
    }

    pub fn validated(
        from_format: impl Into<String>,
        to_format: impl Into<String>,
    ) -> Result<Self, TransformError> {
        let config = Self::new(from_format, to_format);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TransformError> {
        if self.from_format.trim().is_empty() {
            return Err(TransformError::InvalidConfig("from_format is empty".into()));
        }
        if self.to_format.trim().is_empty() {
            return Err(TransformError::InvalidConfig("to_format is empty".into()));
        }
        Ok(())
    }
}
