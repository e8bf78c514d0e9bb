//! Simulation harness errors.

use rotation_core::errors::{ConfigError, RotationError, RotationErrorCode};

pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Rotation error: {0}")]
    Rotation(#[from] RotationError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize frame: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Rotation(RotationError::Config(e))
    }
}

impl RotationErrorCode for SimError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rotation(e) => e.error_code(),
            Self::Io(_) | Self::Json(_) => OUTPUT_ERROR,
        }
    }
}
