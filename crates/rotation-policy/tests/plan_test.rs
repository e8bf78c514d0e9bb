use chrono::{Duration, TimeZone, Utc};
use rotation_core::Timestamp;
use rotation_policy::{BucketKind, RotationPolicy};

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2013, 2, 20, 23, 59, 59).unwrap()
}

/// Newest at `now`, four ancient, three in each window.
fn crowded() -> Vec<Timestamp> {
    let now = now();
    let mut dates = vec![now];
    for d in [40, 50, 60, 70] {
        dates.push(now - Duration::days(d));
    }
    for h in [1, 2, 3] {
        dates.push(now - Duration::hours(h));
        dates.push(now - Duration::days(3) - Duration::hours(h));
        dates.push(now - Duration::days(14) - Duration::hours(h));
    }
    dates
}

#[test]
fn plan_reports_every_bucket() {
    let plan = RotationPolicy::default().plan(crowded(), now());

    assert_eq!(plan.newest, Some(now()));
    assert_eq!(plan.backup_count(), 14);
    assert_eq!(plan.candidates.len(), 13);
    assert!(plan.candidates.windows(2).all(|p| p[0] < p[1]));

    assert_eq!(plan.ancient.kind, BucketKind::Ancient);
    assert_eq!(plan.ancient.lower, None);
    assert_eq!(plan.ancient.members.len(), 4);
    assert_eq!(plan.ancient.kept, vec![now() - Duration::days(40)]);
    assert_eq!(plan.ancient.deleted.len(), 3);

    assert_eq!(plan.windows.len(), 3);
    for window in &plan.windows {
        assert_eq!(window.kind, BucketKind::Window);
        assert_eq!(window.members.len(), 3);
        assert_eq!(window.kept, vec![window.members[0], window.members[2]]);
        assert_eq!(window.deleted, vec![window.members[1]]);
    }

    assert!(plan.unbucketed.is_empty());
    assert!(!plan.safety_valve_tripped);
    assert_eq!(plan.to_delete.len(), 6);
    assert_eq!(plan.to_delete, plan.proposed());
}

#[test]
fn window_bounds_follow_dividers() {
    let plan = RotationPolicy::default().plan(crowded(), now());
    for (i, window) in plan.windows.iter().enumerate() {
        assert_eq!(window.lower, Some(plan.dividers[i]));
        assert_eq!(window.upper, plan.dividers[i + 1]);
    }
    assert_eq!(plan.ancient.upper, plan.dividers[0]);
}

#[test]
fn kept_and_to_delete_partition_the_input() {
    let dates = crowded();
    let plan = RotationPolicy::default().plan(dates.clone(), now());
    let kept = plan.kept();

    assert_eq!(kept.len() + plan.to_delete.len(), dates.len());
    assert!(kept.contains(&now()));
    assert!(kept.is_disjoint(&plan.to_delete));
    for t in &dates {
        assert!(kept.contains(t) || plan.to_delete.contains(t));
    }
}

#[test]
fn select_for_deletion_equals_plan_to_delete() {
    let policy = RotationPolicy::default();
    let dates = crowded();
    assert_eq!(
        policy.select_for_deletion(dates.clone(), now()),
        policy.plan(dates, now()).to_delete
    );
}

#[test]
fn empty_plan_is_well_formed() {
    let plan = RotationPolicy::default().plan(Vec::new(), now());
    assert_eq!(plan.newest, None);
    assert!(plan.candidates.is_empty());
    assert!(plan.ancient.is_empty());
    assert!(plan.windows.iter().all(|w| w.is_empty()));
    assert!(!plan.safety_valve_tripped);
    assert!(plan.kept().is_empty());
}

#[test]
fn plan_serializes_to_json() {
    let plan = RotationPolicy::default().plan(crowded(), now());
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["windows"].as_array().unwrap().len(), 3);
    assert_eq!(json["ancient"]["kind"], "ancient");
    assert_eq!(json["safety_valve_tripped"], false);
    assert_eq!(json["newest"], "2013-02-20T23:59:59Z");
}
