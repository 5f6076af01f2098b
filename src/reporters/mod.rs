//! Output reporters for ownership reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output, one line per file
//! - `json` - Machine-readable JSON

mod json;
mod text;

use crate::models::OwnershipReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown format '{}'. Valid formats: text, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render an ownership report in the specified format
pub fn report(report: &OwnershipReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
    }
}

/// Render the list of all contributors
pub fn contributors(names: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_contributors(names),
        OutputFormat::Json => json::render_contributors(names),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Create a small OwnershipReport for testing
    pub(crate) fn test_report() -> OwnershipReport {
        use crate::models::{commit_timestamp, FileOwnership, Identity, Ownership};

        let vijay = Identity::pair("Vijay Ganesh", Some("David L. Dill"));
        let mut shared = vijay.clone();
        shared.merge(&Identity::single("Alice"));

        OwnershipReport {
            distinguished: "Vijay Ganesh".into(),
            last_active: commit_timestamp(1_600_000_000, 0).unwrap(),
            contributors: vec!["Alice".into(), "David L. Dill".into(), "Vijay Ganesh".into()],
            files: vec![
                FileOwnership {
                    ownership: Ownership::Partial,
                    path: "src/lib.rs".into(),
                    created_on: commit_timestamp(1_500_000_000, 60).unwrap(),
                    owners: shared,
                },
                FileOwnership {
                    ownership: Ownership::Complete,
                    path: "src/main.rs".into(),
                    created_on: commit_timestamp(1_500_000_000, 60).unwrap(),
                    owners: vijay,
                },
                FileOwnership {
                    ownership: Ownership::None,
                    path: "tests/new.rs".into(),
                    created_on: commit_timestamp(1_700_000_000, 0).unwrap(),
                    owners: Identity::single("Alice"),
                },
            ],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
