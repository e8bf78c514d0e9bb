//! Simulation harness configuration.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_SIMULATION_END_SECS, DEFAULT_SIMULATION_START_SECS, DEFAULT_SIMULATION_STEP_HOURS,
    OUTPUT_FORMATS,
};
use crate::errors::ConfigError;
use crate::types::Timestamp;

/// Configuration for the hourly rotation simulation.
///
/// `start` and `end` are RFC 3339 strings in TOML, e.g.
/// `start = "2013-01-01T01:01:01Z"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// First simulated backup time.
    pub start: Option<DateTime<Utc>>,
    /// Last simulated backup time (inclusive).
    pub end: Option<DateTime<Utc>>,
    /// Hours between simulated backups. Default: 1.
    pub step_hours: Option<i64>,
    /// Output format: "text" or "json". Default: "text".
    pub format: Option<String>,
}

impl SimulationConfig {
    pub fn effective_start(&self) -> Timestamp {
        self.start
            .unwrap_or_else(|| unix_seconds(DEFAULT_SIMULATION_START_SECS))
    }

    pub fn effective_end(&self) -> Timestamp {
        self.end
            .unwrap_or_else(|| unix_seconds(DEFAULT_SIMULATION_END_SECS))
    }

    pub fn effective_step_hours(&self) -> i64 {
        self.step_hours.unwrap_or(DEFAULT_SIMULATION_STEP_HOURS)
    }

    /// Simulated interval between backups. Saturates instead of overflowing.
    pub fn effective_step(&self) -> Duration {
        Duration::try_hours(self.effective_step_hours()).unwrap_or(Duration::MAX)
    }

    /// Returns the parsed output format, defaulting to text.
    pub fn effective_format(&self) -> Result<OutputFormat, ConfigError> {
        match self.format.as_deref() {
            None => Ok(OutputFormat::Text),
            Some(raw) => raw.parse(),
        }
    }
}

fn unix_seconds(secs: i64) -> Timestamp {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs)
}

/// How simulation frames are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: "simulation.format".to_string(),
                message: format!("unknown format '{other}', expected one of {OUTPUT_FORMATS:?}"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}
