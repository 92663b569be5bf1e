use thiserror::Error;

use crate::template_parse::TemplateError;

#[derive(Debug, Error)]
pub enum TransformError {
    /// The source could not be parsed; the file is passed through untouched.
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("failed to serialize component content: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TransformError {
    pub fn parse(file: &str, message: impl Into<String>) -> Self {
        TransformError::Parse {
            file: file.to_string(),
            message: message.into(),
        }
    }

    pub fn from_template(file: &str, err: TemplateError) -> Self {
        Self::parse(file, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
