use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownSection,
    InvalidGeometry,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("unknown section '{0}'")]
    UnknownSection(String),
    #[error("invalid {field}: {value}")]
    InvalidGeometry { field: &'static str, value: f32 },
}

impl ViewError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ViewError::UnknownSection(_) => ErrorCode::UnknownSection,
            ViewError::InvalidGeometry { .. } => ErrorCode::InvalidGeometry,
        }
    }
}

/// Serializable form of a [`ViewError`] for trace output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&ViewError> for ErrorReport {
    fn from(value: &ViewError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
