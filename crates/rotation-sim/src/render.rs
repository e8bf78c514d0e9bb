use chrono::SecondsFormat;
use rotation_core::config::OutputFormat;
use rotation_policy::SimulationFrame;

use crate::errors::SimError;

/// Render one frame as a single line.
///
/// Text: `2013-02-01T01:01:01Z survivors=8 ages=[31, 17, 3, 1, 0, 0, 0, 0]`.
/// JSON: the serialized frame.
pub fn render_frame(frame: &SimulationFrame, format: OutputFormat) -> Result<String, SimError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "{} survivors={} ages={:?}",
            frame.now.to_rfc3339_opts(SecondsFormat::Secs, true),
            frame.survivors.len(),
            frame.age_days
        )),
        OutputFormat::Json => Ok(serde_json::to_string(frame)?),
    }
}
