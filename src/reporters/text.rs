//! Text (terminal) reporter

use crate::models::OwnershipReport;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use console::style;
use std::fmt::Write;

/// Locale-style date with offset, e.g. `Sun Sep 13 12:26:40 2020 +0000`
fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format("%c %z").to_string()
}

/// Render report as one line per file, followed by a label summary
pub fn render(report: &OwnershipReport) -> Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "{} last committed on {}",
        report.distinguished,
        format_date(&report.last_active)
    )?;

    for file in &report.files {
        writeln!(
            out,
            "{} -- {} (first added: {})",
            file.ownership,
            file.path,
            format_date(&file.created_on)
        )?;
    }

    let summary: Vec<String> = report
        .summary()
        .into_iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect();
    writeln!(
        out,
        "\n{} {} files ({})",
        style("Summary:").bold(),
        report.files.len(),
        summary.join(", ")
    )?;

    Ok(out)
}

/// Render contributors one per line
pub fn render_contributors(names: &[String]) -> Result<String> {
    let mut out = String::new();
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_lines() {
        console::set_colors_enabled(false);
        let out = render(&test_report()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "Vijay Ganesh last committed on Sun Sep 13 12:26:40 2020 +0000"
        );
        assert_eq!(
            lines[1],
            "Partial -- src/lib.rs (first added: Fri Jul 14 03:40:00 2017 +0100)"
        );
        assert!(lines[2].starts_with("Complete -- src/main.rs"));
        assert!(lines[3].starts_with("None -- tests/new.rs"));
        assert!(out.contains("3 files (Complete: 1, Partial: 1, Inherited: 0, None: 1)"));
    }

    #[test]
    fn test_render_contributors() {
        let out = render_contributors(&test_report().contributors).unwrap();
        assert_eq!(out, "Alice\nDavid L. Dill\nVijay Ganesh\n");
    }
}
