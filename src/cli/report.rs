//! Report command - walk the history and print ownership per file

use anyhow::{Context, Result};
use console::style;
use gitowners::attribution::{build_report, walk_with_progress, AttributionState, IdentityResolver};
use gitowners::config::{load_project_config, ProjectConfig};
use gitowners::git::GitHistory;
use gitowners::models::Ownership;
use gitowners::reporters::{self, OutputFormat};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Flags of the report command
#[derive(Debug, Default)]
pub struct ReportOptions {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub only: Vec<String>,
    pub no_verify: bool,
}

/// Run the report command
pub fn run(path: &Path, options: ReportOptions) -> Result<()> {
    let (history, config) = open_repository(path)?;
    let format = resolve_format(options.format.as_deref(), &config)?;
    let verify = !options.no_verify && config.report.verify.unwrap_or(true);

    let resolver = IdentityResolver::from_config(&config.identity)?;
    let state = walk_history(&history, &resolver, format)?;

    let workdir = if verify {
        Some(history.repo_root().context("Use --no-verify for bare repositories")?)
    } else {
        None
    };
    let mut report = build_report(&state, &resolver, workdir)?;

    if !options.only.is_empty() {
        let labels = options
            .only
            .iter()
            .map(|label| Ownership::from_str(label))
            .collect::<Result<Vec<_>>>()?;
        report.retain_labels(&labels);
    }

    let rendered = reporters::report(&report, format)?;
    emit(&rendered, options.output.as_deref())
}

/// Run the contributors command
pub fn run_contributors(path: &Path, format: Option<String>) -> Result<()> {
    let (history, config) = open_repository(path)?;
    let format = resolve_format(format.as_deref(), &config)?;

    let resolver = IdentityResolver::from_config(&config.identity)?;
    let state = walk_history(&history, &resolver, format)?;

    let names: Vec<String> = state
        .all_contributors()
        .names()
        .map(str::to_string)
        .collect();
    let rendered = reporters::contributors(&names, format)?;
    emit(&rendered, None)
}

/// Open the repository and load its project config
fn open_repository(path: &Path) -> Result<(GitHistory, ProjectConfig)> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;
    let history = GitHistory::open(&repo_path)?;

    let config_root = history.repo_root().unwrap_or(repo_path.as_path()).to_path_buf();
    let config = load_project_config(&config_root);
    Ok((history, config))
}

/// CLI flag wins over gitowners.toml, which wins over text
fn resolve_format(flag: Option<&str>, config: &ProjectConfig) -> Result<OutputFormat> {
    let format = flag
        .or(config.report.format.as_deref())
        .unwrap_or("text");
    OutputFormat::from_str(format)
}

/// Walk the whole history behind a spinner
fn walk_history(
    history: &GitHistory,
    resolver: &IdentityResolver,
    format: OutputFormat,
) -> Result<AttributionState> {
    let spinner = create_spinner(format);

    let state = walk_with_progress(history, resolver.clone(), |commit| {
        spinner.inc(1);
        spinner.set_message(format!(
            "Walking history... {}",
            &commit.id[..commit.id.len().min(12)]
        ));
    });

    let state = match state {
        Ok(state) => state,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    spinner.finish_with_message(format!(
        "{}Walked {} commits, {} live files",
        style("✓ ").green(),
        style(state.commits_processed()).cyan(),
        style(state.live_count()).cyan()
    ));
    Ok(state)
}

/// Spinner for the history walk; hidden when the output is JSON
fn create_spinner(format: OutputFormat) -> ProgressBar {
    if format == OutputFormat::Json {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.set_message("Walking history...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Create spinner progress style
fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Write to the output file, or stdout
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
            eprintln!("Report written to {}", style(path.display()).cyan());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_hides_spinner() {
        let spinner = create_spinner(OutputFormat::Json);
        assert!(spinner.is_hidden());
        spinner.finish_and_clear();
    }
}
