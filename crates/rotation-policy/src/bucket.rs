//! Buckets of deletion candidates and how each one is thinned.

use serde::Serialize;

use rotation_core::Timestamp;

/// Which thinning rule a bucket follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    /// Older than the oldest divider: keep only the youngest member.
    Ancient,
    /// Strictly between two dividers: keep the oldest and newest member.
    Window,
}

/// One bucket of a rotation plan.
///
/// `deleted` is what the bucket proposes; the plan's safety valve may still
/// discard every proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketReport {
    pub kind: BucketKind,
    /// Exclusive lower bound. `None` for the ancient bucket.
    pub lower: Option<Timestamp>,
    /// Exclusive upper bound.
    pub upper: Timestamp,
    /// Members in ascending order.
    pub members: Vec<Timestamp>,
    pub kept: Vec<Timestamp>,
    pub deleted: Vec<Timestamp>,
}

impl BucketReport {
    /// Ancient bucket: everything strictly before `upper`.
    /// `sorted` must be ascending.
    pub fn ancient(upper: Timestamp, sorted: &[Timestamp]) -> Self {
        let members: Vec<Timestamp> = sorted.iter().copied().filter(|t| *t < upper).collect();
        let (deleted, kept) = match members.split_last() {
            Some((youngest, older)) => (older.to_vec(), vec![*youngest]),
            None => (Vec::new(), Vec::new()),
        };
        Self {
            kind: BucketKind::Ancient,
            lower: None,
            upper,
            members,
            kept,
            deleted,
        }
    }

    /// Window bucket: everything strictly between `lower` and `upper`.
    /// `sorted` must be ascending.
    pub fn window(lower: Timestamp, upper: Timestamp, sorted: &[Timestamp]) -> Self {
        let members: Vec<Timestamp> = sorted
            .iter()
            .copied()
            .filter(|t| *t > lower && *t < upper)
            .collect();
        let (kept, deleted) = if members.len() <= 2 {
            (members.clone(), Vec::new())
        } else {
            let last = members.len() - 1;
            (
                vec![members[0], members[last]],
                members[1..last].to_vec(),
            )
        };
        Self {
            kind: BucketKind::Window,
            lower: Some(lower),
            upper,
            members,
            kept,
            deleted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, t: &Timestamp) -> bool {
        self.members.binary_search(t).is_ok()
    }
}
