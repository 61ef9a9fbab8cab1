//! JSON reporter
//!
//! Outputs the full IdentificationReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::IdentificationReport;
use anyhow::Result;

/// Render an identification result as JSON
pub fn render(report: &IdentificationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render an identification result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(report: &IdentificationReport) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}
