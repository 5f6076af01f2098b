//! JSON reporter
//!
//! Outputs the full OwnershipReport as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::OwnershipReport;
use anyhow::Result;

/// Render report as JSON
pub fn render(report: &OwnershipReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the contributor list as a JSON array
pub fn render_contributors(names: &[String]) -> Result<String> {
    Ok(serde_json::to_string_pretty(names)?)
}
