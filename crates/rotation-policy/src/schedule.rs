use chrono::{DateTime, Duration, Utc};
use rotation_core::config::schedule_config::check_offsets;
use rotation_core::config::ScheduleConfig;
use rotation_core::constants::DEFAULT_DIVIDER_OFFSETS_MINUTES;
use rotation_core::{RotationError, Timestamp};

/// Divider offsets, oldest first. The last divider is always `now` itself
/// and is not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionSchedule {
    offsets: Vec<Duration>,
}

impl RetentionSchedule {
    /// Build a schedule from offsets before `now`, oldest first.
    ///
    /// Offsets must be non-empty, positive, and strictly decreasing.
    pub fn new(offsets: Vec<Duration>) -> Result<Self, RotationError> {
        check_offsets(&offsets, &Duration::zero()).map_err(invalid)?;
        Ok(Self { offsets })
    }

    /// Build a schedule from whole-minute offsets.
    pub fn from_minutes(minutes: &[i64]) -> Result<Self, RotationError> {
        let offsets = minutes
            .iter()
            .map(|&m| {
                Duration::try_minutes(m)
                    .ok_or_else(|| invalid(format!("offset {m} minutes is out of range")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(offsets)
    }

    /// Build a schedule from the `[schedule]` config section.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, RotationError> {
        Self::from_minutes(&config.effective_offsets_minutes())
    }

    pub fn offsets(&self) -> &[Duration] {
        &self.offsets
    }

    /// Number of windows between consecutive dividers.
    pub fn window_count(&self) -> usize {
        self.offsets.len()
    }

    /// Divider timestamps for `now`, oldest first, ending with `now`.
    ///
    /// Dividers that would fall before the earliest representable time are
    /// clamped to it.
    pub fn dividers(&self, now: Timestamp) -> Vec<Timestamp> {
        self.offsets
            .iter()
            .map(|offset| {
                now.checked_sub_signed(*offset)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC)
            })
            .chain(std::iter::once(now))
            .collect()
    }
}

impl Default for RetentionSchedule {
    /// 28 days 1 hour, 7 days 1 hour, 1 day 1 hour.
    fn default() -> Self {
        Self {
            offsets: DEFAULT_DIVIDER_OFFSETS_MINUTES
                .iter()
                .map(|&m| Duration::minutes(m))
                .collect(),
        }
    }
}

fn invalid(reason: impl Into<String>) -> RotationError {
    RotationError::InvalidSchedule {
        reason: reason.into(),
    }
}
