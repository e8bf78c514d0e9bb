//! Replays periodic backups through a rotation policy.
//!
//! Each step takes a backup at the current time, deletes whatever the
//! policy selects, and advances the clock. Frames record the surviving age
//! distribution so the long-run shape of a schedule can be inspected.

use std::collections::BTreeSet;

use chrono::Duration;
use serde::Serialize;

use rotation_core::config::SimulationConfig;
use rotation_core::traits::IRotationPolicy;
use rotation_core::{RotationError, Timestamp};

use crate::policy::RotationPolicy;

/// State after one simulated backup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationFrame {
    pub now: Timestamp,
    /// Backup taken in this step.
    pub added: Timestamp,
    /// Backups deleted in this step, ascending.
    pub deleted: Vec<Timestamp>,
    /// Surviving backups, ascending.
    pub survivors: Vec<Timestamp>,
    /// Whole-day age of each survivor, oldest first.
    pub age_days: Vec<i64>,
}

impl SimulationFrame {
    /// Age of the oldest survivor.
    pub fn oldest_age(&self) -> Option<Duration> {
        self.survivors.first().map(|oldest| self.now - *oldest)
    }
}

pub struct Simulation<P: IRotationPolicy = RotationPolicy> {
    policy: P,
    now: Timestamp,
    step: Duration,
    survivors: BTreeSet<Timestamp>,
    /// The clock cannot advance past the last representable time.
    exhausted: bool,
}

impl<P: IRotationPolicy> Simulation<P> {
    /// Start with no backups at `start`, taking one backup every `step`.
    pub fn new(policy: P, start: Timestamp, step: Duration) -> Result<Self, RotationError> {
        if step <= Duration::zero() {
            return Err(RotationError::InvalidSimulation {
                reason: format!("step must be positive, got {}s", step.num_seconds()),
            });
        }
        Ok(Self {
            policy,
            now: start,
            step,
            survivors: BTreeSet::new(),
            exhausted: false,
        })
    }

    /// Time of the next simulated backup.
    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn survivors(&self) -> &BTreeSet<Timestamp> {
        &self.survivors
    }

    /// Take a backup at the current time, apply the policy, advance the clock.
    pub fn step(&mut self) -> SimulationFrame {
        let now = self.now;
        self.survivors.insert(now);

        let deleted = self.policy.select_for_deletion(&self.survivors, now);
        for t in &deleted {
            self.survivors.remove(t);
        }

        tracing::trace!(
            %now,
            delete_count = deleted.len(),
            survivor_count = self.survivors.len(),
            "simulation step"
        );

        let frame = SimulationFrame {
            now,
            added: now,
            deleted: deleted.into_iter().collect(),
            survivors: self.survivors.iter().copied().collect(),
            age_days: self
                .survivors
                .iter()
                .map(|t| (now - *t).num_days())
                .collect(),
        };
        match now.checked_add_signed(self.step) {
            Some(next) => self.now = next,
            None => self.exhausted = true,
        }
        frame
    }

    /// Step while the next backup time is at or before `end`.
    pub fn run_until(&mut self, end: Timestamp) -> impl Iterator<Item = SimulationFrame> + '_ {
        std::iter::from_fn(move || {
            if !self.exhausted && self.now <= end {
                Some(self.step())
            } else {
                None
            }
        })
    }
}

impl Simulation<RotationPolicy> {
    /// Build a simulation from the `[simulation]` config section.
    pub fn from_config(
        policy: RotationPolicy,
        config: &SimulationConfig,
    ) -> Result<Self, RotationError> {
        Self::new(policy, config.effective_start(), config.effective_step())
    }
}
