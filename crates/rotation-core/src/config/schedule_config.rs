//! Retention schedule configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DIVIDER_OFFSETS_MINUTES;

/// Divider offsets for the retention schedule.
///
/// Offsets are ages before `now` in minutes, oldest first. The final
/// divider at `now` is implicit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Divider offsets in minutes. Default: 28d1h, 7d1h, 1d1h.
    pub offsets_minutes: Option<Vec<i64>>,
}

impl ScheduleConfig {
    /// Returns the effective divider offsets.
    pub fn effective_offsets_minutes(&self) -> Vec<i64> {
        self.offsets_minutes
            .clone()
            .unwrap_or_else(|| DEFAULT_DIVIDER_OFFSETS_MINUTES.to_vec())
    }
}

/// Shape rules shared by config validation and schedule construction:
/// at least one offset, every offset above `zero`, strictly decreasing.
pub fn check_offsets<T: PartialOrd>(offsets: &[T], zero: &T) -> Result<(), &'static str> {
    if offsets.is_empty() {
        return Err("at least one divider offset is required");
    }
    if offsets.iter().any(|offset| offset <= zero) {
        return Err("offsets must be positive");
    }
    if offsets.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err("offsets must be strictly decreasing, oldest first");
    }
    Ok(())
}
