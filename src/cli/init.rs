//! Init command - write an example gitowners.toml

use anyhow::{Context, Result};
use console::style;
use gitowners::config::{example_config, CONFIG_FILE_NAMES};
use gitowners::git::GitHistory;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let repo_path = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !repo_path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", repo_path.display());
    }

    // Reports read config from the working tree root, so write it there
    let config_root = match GitHistory::open(&repo_path) {
        Ok(history) => history
            .repo_root()
            .map(Path::to_path_buf)
            .unwrap_or(repo_path),
        Err(_) => repo_path,
    };

    let config_path = config_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, example_config())
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );

    println!("\nNext steps:");
    println!("  {} Set the distinguished contributor", style("edit gitowners.toml").cyan());
    println!("  {} Report ownership", style("gitowners .").cyan());

    Ok(())
}
