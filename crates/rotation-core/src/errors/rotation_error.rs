//! Rotation errors.
//!
//! Selection itself is total and never fails; only building a policy or a
//! simulation from invalid parameters does.

use super::error_code::{self, RotationErrorCode};
use super::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    #[error("Invalid retention schedule: {reason}")]
    InvalidSchedule { reason: String },

    #[error("Invalid simulation: {reason}")]
    InvalidSimulation { reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RotationErrorCode for RotationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSchedule { .. } => error_code::INVALID_SCHEDULE,
            Self::InvalidSimulation { .. } => error_code::INVALID_SIMULATION,
            Self::Config(e) => e.error_code(),
        }
    }
}
