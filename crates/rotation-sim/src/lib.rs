//! # rotation-sim
//!
//! Diagnostic harness: replays periodic backups through the rotation policy
//! and prints the survivor age distribution each time it changes.

pub mod errors;
pub mod render;

use std::io::Write;

use rotation_core::config::RotationConfig;
use rotation_policy::{RotationPolicy, Simulation};

pub use errors::SimError;
pub use render::render_frame;

/// Totals for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Simulated backups taken.
    pub steps: usize,
    /// Frames written because the age distribution changed.
    pub frames_written: usize,
    /// Backups deleted over the whole run.
    pub deleted: usize,
    /// Survivors at the end of the run.
    pub survivors: usize,
}

/// Run the simulation described by `config`, writing changed frames to `out`.
pub fn run<W: Write>(config: &RotationConfig, out: &mut W) -> Result<RunSummary, SimError> {
    let policy = RotationPolicy::from_config(&config.schedule)?;
    let format = config.simulation.effective_format()?;
    let end = config.simulation.effective_end();
    let mut sim = Simulation::from_config(policy, &config.simulation)?;

    tracing::info!(
        start = %sim.now(),
        %end,
        step_hours = config.simulation.effective_step_hours(),
        %format,
        "starting rotation simulation"
    );

    let mut summary = RunSummary::default();
    let mut last_ages: Option<Vec<i64>> = None;
    for frame in sim.run_until(end) {
        summary.steps += 1;
        summary.deleted += frame.deleted.len();
        summary.survivors = frame.survivors.len();

        if last_ages.as_ref() == Some(&frame.age_days) {
            continue;
        }
        writeln!(out, "{}", render_frame(&frame, format)?)?;
        summary.frames_written += 1;
        last_ages = Some(frame.age_days);
    }
    out.flush()?;

    tracing::info!(
        steps = summary.steps,
        frames = summary.frames_written,
        deleted = summary.deleted,
        survivors = summary.survivors,
        "rotation simulation finished"
    );
    Ok(summary)
}
