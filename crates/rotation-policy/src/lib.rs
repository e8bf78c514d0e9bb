//! # rotation-policy
//!
//! Logarithmic-decay backup rotation. Given the creation times of a set of
//! backups, picks the ones that can be deleted so survivors stay dense near
//! `now` and thin out further into the past.
//!
//! Dividers at `now - 28d1h`, `now - 7d1h`, `now - 1d1h` and `now` split the
//! time axis into three windows plus an ancient region:
//! - each window keeps its oldest and newest backup and loses the interior,
//! - the ancient region keeps only its youngest backup,
//! - the newest backup overall is never a candidate,
//! - a selection that would remove every candidate is discarded.
//!
//! Bounds are exclusive on both ends: a backup exactly on a divider belongs
//! to no window and is never thinned.

pub mod bucket;
pub mod plan;
pub mod policy;
pub mod schedule;
pub mod simulation;

use std::collections::BTreeSet;

use chrono::Utc;
use rotation_core::Timestamp;

pub use bucket::{BucketKind, BucketReport};
pub use plan::RotationPlan;
pub use policy::RotationPolicy;
pub use schedule::RetentionSchedule;
pub use simulation::{Simulation, SimulationFrame};

/// Select the backups that are safe to delete at `now` under the default
/// schedule. Duplicate timestamps collapse into one backup.
pub fn select_for_deletion<I>(dates: I, now: Timestamp) -> BTreeSet<Timestamp>
where
    I: IntoIterator<Item = Timestamp>,
{
    RotationPolicy::default().select_for_deletion(dates, now)
}

/// [`select_for_deletion`] against the wall clock, read at call time.
pub fn select_for_deletion_now<I>(dates: I) -> BTreeSet<Timestamp>
where
    I: IntoIterator<Item = Timestamp>,
{
    select_for_deletion(dates, Utc::now())
}
