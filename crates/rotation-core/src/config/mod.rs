//! Configuration system for backup rotation.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod logging_config;
pub mod rotation_config;
pub mod schedule_config;
pub mod simulation_config;

pub use logging_config::LoggingConfig;
pub use rotation_config::{ConfigOverrides, RotationConfig};
pub use schedule_config::ScheduleConfig;
pub use simulation_config::{OutputFormat, SimulationConfig};
