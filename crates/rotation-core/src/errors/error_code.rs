//! RotationErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string
/// alongside its human-readable message.
pub trait RotationErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_SCHEDULE: &str = "INVALID_SCHEDULE";
pub const INVALID_SIMULATION: &str = "INVALID_SIMULATION";
