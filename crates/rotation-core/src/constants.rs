//! Shared constants for backup rotation.

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Oldest divider offset: 28 days and 1 hour before now.
pub const MONTHLY_DIVIDER_MINUTES: i64 = 28 * MINUTES_PER_DAY + MINUTES_PER_HOUR;

/// Middle divider offset: 7 days and 1 hour before now.
pub const WEEKLY_DIVIDER_MINUTES: i64 = 7 * MINUTES_PER_DAY + MINUTES_PER_HOUR;

/// Youngest divider offset: 1 day and 1 hour before now.
pub const DAILY_DIVIDER_MINUTES: i64 = MINUTES_PER_DAY + MINUTES_PER_HOUR;

/// Default divider offsets, oldest first. The final divider is always `now`.
pub const DEFAULT_DIVIDER_OFFSETS_MINUTES: [i64; 3] = [
    MONTHLY_DIVIDER_MINUTES,
    WEEKLY_DIVIDER_MINUTES,
    DAILY_DIVIDER_MINUTES,
];

/// Default simulation start: 2013-01-01T01:01:01Z, as Unix seconds.
pub const DEFAULT_SIMULATION_START_SECS: i64 = 1_357_002_061;

/// Default simulation end (inclusive): 2013-04-01T01:01:01Z, as Unix seconds.
pub const DEFAULT_SIMULATION_END_SECS: i64 = 1_364_778_061;

/// Default simulated interval between backups.
pub const DEFAULT_SIMULATION_STEP_HOURS: i64 = 1;

/// Output formats understood by the simulation harness.
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Default tracing filter when `ROTATION_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "rotation=info";
