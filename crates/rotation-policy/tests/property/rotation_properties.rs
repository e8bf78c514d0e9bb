use std::collections::BTreeSet;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use rotation_core::Timestamp;
use rotation_policy::{select_for_deletion, RotationPolicy};

fn base() -> Timestamp {
    Utc.with_ymd_and_hms(2013, 2, 20, 23, 59, 59).unwrap()
}

/// Backups spread over ~100 days before `base`, at minute resolution so
/// divider collisions happen.
fn arb_dates() -> impl Strategy<Value = Vec<Timestamp>> {
    prop::collection::vec(0i64..(100 * 24 * 60), 0..60).prop_map(|minutes| {
        minutes
            .into_iter()
            .map(|m| base() - Duration::minutes(m))
            .collect()
    })
}

/// `now` anywhere from well before to well after the backups.
fn arb_now() -> impl Strategy<Value = Timestamp> {
    (-(120i64 * 24 * 60)..(60 * 24 * 60)).prop_map(|m| base() + Duration::minutes(m))
}

proptest! {
    #[test]
    fn newest_backup_is_never_deleted(dates in arb_dates(), now in arb_now()) {
        let delete = select_for_deletion(dates.clone(), now);
        if let Some(newest) = dates.iter().max() {
            prop_assert!(!delete.contains(newest));
        }
    }

    #[test]
    fn result_is_subset_of_candidates(dates in arb_dates(), now in arb_now()) {
        let mut candidates: BTreeSet<Timestamp> = dates.iter().copied().collect();
        if let Some(newest) = dates.iter().max() {
            candidates.remove(newest);
        }
        let delete = select_for_deletion(dates, now);
        prop_assert!(delete.is_subset(&candidates));
    }

    #[test]
    fn never_deletes_every_candidate(dates in arb_dates(), now in arb_now()) {
        let unique: BTreeSet<Timestamp> = dates.iter().copied().collect();
        let candidate_count = unique.len().saturating_sub(1);
        let delete = select_for_deletion(dates, now);
        if candidate_count > 0 {
            prop_assert!(delete.len() < candidate_count);
        } else {
            prop_assert!(delete.is_empty());
        }
    }

    #[test]
    fn deterministic_for_same_inputs(dates in arb_dates(), now in arb_now()) {
        let policy = RotationPolicy::default();
        prop_assert_eq!(
            policy.select_for_deletion(dates.clone(), now),
            policy.select_for_deletion(dates, now)
        );
    }

    #[test]
    fn every_non_empty_bucket_keeps_a_member(dates in arb_dates(), now in arb_now()) {
        let plan = RotationPolicy::default().plan(dates, now);
        for bucket in std::iter::once(&plan.ancient).chain(plan.windows.iter()) {
            if !bucket.is_empty() {
                prop_assert!(!bucket.kept.is_empty());
            }
            prop_assert_eq!(bucket.kept.len() + bucket.deleted.len(), bucket.members.len());
        }
    }

    #[test]
    fn every_candidate_lands_in_exactly_one_place(dates in arb_dates(), now in arb_now()) {
        let plan = RotationPolicy::default().plan(dates, now);
        for t in &plan.candidates {
            let homes = std::iter::once(&plan.ancient)
                .chain(plan.windows.iter())
                .filter(|b| b.contains(t))
                .count()
                + usize::from(plan.unbucketed.contains(t));
            prop_assert_eq!(homes, 1, "candidate {} placed {} times", t, homes);
        }
    }

    #[test]
    fn divider_timestamps_are_never_thinned(
        dates in arb_dates(),
        now in arb_now(),
        which in 0usize..4,
    ) {
        let divider = RotationPolicy::default().plan(Vec::new(), now).dividers[which];
        let mut with_divider = dates;
        with_divider.push(divider);
        // A later backup makes sure the divider is a candidate.
        with_divider.push(now + Duration::days(1));
        let delete = select_for_deletion(with_divider, now);
        prop_assert!(!delete.contains(&divider));
    }
}
