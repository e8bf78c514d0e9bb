use std::collections::BTreeSet;

use serde::Serialize;

use rotation_core::Timestamp;

use crate::bucket::BucketReport;

/// The full rotation decision for one set of backups at one `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationPlan {
    /// Reference time the plan was computed for.
    pub now: Timestamp,
    /// Newest backup. Always kept; never a candidate.
    pub newest: Option<Timestamp>,
    /// Every other backup, ascending.
    pub candidates: Vec<Timestamp>,
    /// Divider timestamps, oldest first, ending with `now`.
    pub dividers: Vec<Timestamp>,
    pub ancient: BucketReport,
    /// One bucket per pair of consecutive dividers, oldest first.
    pub windows: Vec<BucketReport>,
    /// Candidates in no bucket: exactly on a divider, or later than `now`.
    /// Always kept.
    pub unbucketed: Vec<Timestamp>,
    /// The buckets proposed deleting every candidate, so nothing is deleted.
    pub safety_valve_tripped: bool,
    pub to_delete: BTreeSet<Timestamp>,
}

impl RotationPlan {
    /// Backups that survive this plan.
    pub fn kept(&self) -> BTreeSet<Timestamp> {
        self.candidates
            .iter()
            .chain(self.newest.iter())
            .filter(|t| !self.to_delete.contains(*t))
            .copied()
            .collect()
    }

    /// Deletions proposed by the buckets before the safety valve.
    pub fn proposed(&self) -> BTreeSet<Timestamp> {
        std::iter::once(&self.ancient)
            .chain(self.windows.iter())
            .flat_map(|bucket| bucket.deleted.iter().copied())
            .collect()
    }

    pub fn backup_count(&self) -> usize {
        self.candidates.len() + usize::from(self.newest.is_some())
    }
}
