//! Top-level rotation configuration with layered resolution.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schedule_config::check_offsets;
use super::{LoggingConfig, ScheduleConfig, SimulationConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the given root.
pub const PROJECT_CONFIG_FILE: &str = "rotation.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`ROTATION_*`)
/// 3. Project config (`rotation.toml` in project root)
/// 4. User config (`~/.rotation/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RotationConfig {
    pub schedule: ScheduleConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

/// Override values supplied by the caller, e.g. from a command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub offsets_minutes: Option<Vec<i64>>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub step_hours: Option<i64>,
    pub format: Option<String>,
}

impl RotationConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(
            root = %root.display(),
            offsets = ?config.schedule.effective_offsets_minutes(),
            "rotation config resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &RotationConfig) -> Result<(), ConfigError> {
        if let Some(ref offsets) = config.schedule.offsets_minutes {
            check_offsets(offsets, &0).map_err(|message| ConfigError::ValidationFailed {
                field: "schedule.offsets_minutes".to_string(),
                message: message.to_string(),
            })?;
        }
        if let Some(step) = config.simulation.step_hours {
            if step <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "simulation.step_hours".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if config.simulation.effective_end() < config.simulation.effective_start() {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.end".to_string(),
                message: "must not be earlier than simulation.start".to_string(),
            });
        }
        config.simulation.effective_format()?;
        Ok(())
    }

    /// Returns the user config path: `~/.rotation/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RotationConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: RotationConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut RotationConfig, other: &RotationConfig) {
        if other.schedule.offsets_minutes.is_some() {
            base.schedule.offsets_minutes = other.schedule.offsets_minutes.clone();
        }

        if other.simulation.start.is_some() {
            base.simulation.start = other.simulation.start;
        }
        if other.simulation.end.is_some() {
            base.simulation.end = other.simulation.end;
        }
        if other.simulation.step_hours.is_some() {
            base.simulation.step_hours = other.simulation.step_hours;
        }
        if other.simulation.format.is_some() {
            base.simulation.format = other.simulation.format.clone();
        }

        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Malformed numbers and timestamps are errors, not skipped.
    fn apply_env_overrides(config: &mut RotationConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("ROTATION_SCHEDULE_OFFSETS_MINUTES") {
            config.schedule.offsets_minutes =
                Some(parse_offsets("ROTATION_SCHEDULE_OFFSETS_MINUTES", &val)?);
        }
        if let Ok(val) = std::env::var("ROTATION_SIM_START") {
            config.simulation.start = Some(parse_timestamp("ROTATION_SIM_START", &val)?);
        }
        if let Ok(val) = std::env::var("ROTATION_SIM_END") {
            config.simulation.end = Some(parse_timestamp("ROTATION_SIM_END", &val)?);
        }
        if let Ok(val) = std::env::var("ROTATION_SIM_STEP_HOURS") {
            let step = val.trim().parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                field: "ROTATION_SIM_STEP_HOURS".to_string(),
                message: e.to_string(),
            })?;
            config.simulation.step_hours = Some(step);
        }
        if let Ok(val) = std::env::var("ROTATION_SIM_FORMAT") {
            config.simulation.format = Some(val);
        }
        Ok(())
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut RotationConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.offsets_minutes {
            config.schedule.offsets_minutes = Some(v.clone());
        }
        if let Some(v) = overrides.start {
            config.simulation.start = Some(v);
        }
        if let Some(v) = overrides.end {
            config.simulation.end = Some(v);
        }
        if let Some(v) = overrides.step_hours {
            config.simulation.step_hours = Some(v);
        }
        if let Some(ref v) = overrides.format {
            config.simulation.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_offsets(field: &str, raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                field: field.to_string(),
                message: format!("'{part}': {e}"),
            })
        })
        .collect()
}

fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ConfigError::InvalidValue {
            field: field.to_string(),
            message: e.to_string(),
        })
}

/// Returns the user-level rotation config directory: `~/.rotation/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".rotation"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
