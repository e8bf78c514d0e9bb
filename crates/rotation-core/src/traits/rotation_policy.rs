use std::collections::BTreeSet;

use crate::types::Timestamp;

/// Decides which backups may be deleted.
///
/// Implementations are pure: the same set and `now` always yield the same
/// answer, and the newest backup is never returned.
pub trait IRotationPolicy: Send + Sync {
    /// Return the subset of `backups` that is safe to delete at `now`.
    fn select_for_deletion(&self, backups: &BTreeSet<Timestamp>, now: Timestamp)
        -> BTreeSet<Timestamp>;
}
