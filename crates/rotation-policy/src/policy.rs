use std::collections::BTreeSet;

use rotation_core::config::ScheduleConfig;
use rotation_core::traits::IRotationPolicy;
use rotation_core::{RotationError, Timestamp};

use crate::bucket::BucketReport;
use crate::plan::RotationPlan;
use crate::schedule::RetentionSchedule;

/// Rotation policy over a retention schedule.
///
/// Stateless: every call recomputes its dividers from the `now` it is given.
#[derive(Debug, Clone, Default)]
pub struct RotationPolicy {
    schedule: RetentionSchedule,
}

impl RotationPolicy {
    pub fn new(schedule: RetentionSchedule) -> Self {
        Self { schedule }
    }

    /// Build a policy from the `[schedule]` config section.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, RotationError> {
        RetentionSchedule::from_config(config).map(Self::new)
    }

    pub fn schedule(&self) -> &RetentionSchedule {
        &self.schedule
    }

    /// Backups that are safe to delete at `now`.
    pub fn select_for_deletion<I>(&self, dates: I, now: Timestamp) -> BTreeSet<Timestamp>
    where
        I: IntoIterator<Item = Timestamp>,
    {
        self.plan(dates, now).to_delete
    }

    /// Compute the full rotation decision, bucket by bucket.
    pub fn plan<I>(&self, dates: I, now: Timestamp) -> RotationPlan
    where
        I: IntoIterator<Item = Timestamp>,
    {
        let unique: BTreeSet<Timestamp> = dates.into_iter().collect();
        let mut candidates: Vec<Timestamp> = unique.into_iter().collect();
        let newest = candidates.pop();

        let dividers = self.schedule.dividers(now);
        // The schedule has at least one offset, so there are at least two dividers.
        let oldest_divider = dividers[0];

        let ancient = BucketReport::ancient(oldest_divider, &candidates);
        let windows: Vec<BucketReport> = dividers
            .windows(2)
            .map(|pair| BucketReport::window(pair[0], pair[1], &candidates))
            .collect();

        let unbucketed: Vec<Timestamp> = candidates
            .iter()
            .copied()
            .filter(|t| *t >= oldest_divider && (*t > now || dividers.binary_search(t).is_ok()))
            .collect();

        let mut plan = RotationPlan {
            now,
            newest,
            candidates,
            dividers,
            ancient,
            windows,
            unbucketed,
            safety_valve_tripped: false,
            to_delete: BTreeSet::new(),
        };
        let (to_delete, tripped) = safety_valve(plan.proposed(), plan.candidates.len());
        plan.to_delete = to_delete;
        plan.safety_valve_tripped = tripped;

        tracing::debug!(
            %now,
            backup_count = plan.backup_count(),
            ancient_count = plan.ancient.members.len(),
            window_counts = ?plan.windows.iter().map(|w| w.members.len()).collect::<Vec<_>>(),
            unbucketed_count = plan.unbucketed.len(),
            delete_count = plan.to_delete.len(),
            "rotation plan computed"
        );
        plan
    }
}

/// Never delete every candidate: a proposal covering all of them is
/// replaced by an empty one. Returns the surviving proposal and whether it
/// was discarded.
fn safety_valve(
    proposed: BTreeSet<Timestamp>,
    candidate_count: usize,
) -> (BTreeSet<Timestamp>, bool) {
    if candidate_count > 0 && proposed.len() >= candidate_count {
        tracing::debug!(
            candidate_count,
            proposed_count = proposed.len(),
            "refusing to delete every candidate backup"
        );
        return (BTreeSet::new(), true);
    }
    (proposed, false)
}

impl IRotationPolicy for RotationPolicy {
    fn select_for_deletion(
        &self,
        backups: &BTreeSet<Timestamp>,
        now: Timestamp,
    ) -> BTreeSet<Timestamp> {
        RotationPolicy::select_for_deletion(self, backups.iter().copied(), now)
    }
}
