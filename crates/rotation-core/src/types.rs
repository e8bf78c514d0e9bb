//! Shared time types.

use chrono::{DateTime, Utc};

/// A backup is identified solely by its creation time.
pub type Timestamp = DateTime<Utc>;
