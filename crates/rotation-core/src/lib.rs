//! # rotation-core
//!
//! Foundation crate for the backup rotation workspace.
//! Defines the shared timestamp type, errors, config, tracing setup, and
//! constants. The policy and simulation crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use config::RotationConfig;
pub use errors::{ConfigError, RotationError, RotationErrorCode};
pub use traits::IRotationPolicy;
pub use types::Timestamp;
