//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive used when `ROTATION_LOG` is unset.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Returns the effective filter, defaulting to `rotation=info`.
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
