//! Error handling for backup rotation.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod rotation_error;

pub use config_error::ConfigError;
pub use error_code::RotationErrorCode;
pub use rotation_error::RotationError;
