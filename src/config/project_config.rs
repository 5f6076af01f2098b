//! Project-level configuration support
//!
//! Loads per-project configuration from `gitowners.toml` or
//! `.gitownersrc.json` in the repository root.
//!
//! # Configuration Format
//!
//! ```toml
//! # gitowners.toml
//!
//! [identity]
//! name = "Vijay Ganesh"          # distinguished contributor
//! marker = "ganesh"              # case-insensitive alias substring
//! co_attributed = "David L. Dill" # "" to credit nobody else
//!
//! [report]
//! format = "text"
//! verify = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// File names probed by [`load_project_config`], in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["gitowners.toml", ".gitownersrc.json"];

/// Complete project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Who the distinguished contributor is
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Default report flags
    #[serde(default)]
    pub report: ReportDefaults,
}

/// Distinguished contributor and alias rule
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Canonical name of the distinguished contributor
    #[serde(default = "default_name")]
    pub name: String,

    /// Substring that identifies the contributor's aliases (case-insensitive)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Name credited alongside the distinguished contributor
    #[serde(default = "default_co_attributed")]
    pub co_attributed: Option<String>,
}

fn default_name() -> String {
    "Vijay Ganesh".to_string()
}

fn default_marker() -> String {
    "ganesh".to_string()
}

fn default_co_attributed() -> Option<String> {
    Some("David L. Dill".to_string())
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            marker: default_marker(),
            co_attributed: default_co_attributed(),
        }
    }
}

impl IdentityConfig {
    /// Co-attributed name, treating an empty string as none.
    pub fn co_attributed(&self) -> Option<&str> {
        self.co_attributed
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportDefaults {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: Option<String>,

    /// Check that every live path exists in the working tree
    #[serde(default)]
    pub verify: Option<bool>,
}

/// Load project configuration from the repository root.
///
/// Falls back to defaults when no file exists or the file cannot be parsed.
pub fn load_project_config(repo_path: &Path) -> ProjectConfig {
    let toml_path = repo_path.join(CONFIG_FILE_NAMES[0]);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    let json_path = repo_path.join(CONFIG_FILE_NAMES[1]);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded project config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No project config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Example config written by `gitowners init`.
pub fn example_config() -> &'static str {
    r#"# gitowners configuration

[identity]
# Distinguished contributor: ownership labels are relative to their activity
name = "Vijay Ganesh"

# Authors whose name contains this substring (any case) are credited to them
marker = "ganesh"

# Also credit this name on their commits ("" to disable)
co_attributed = "David L. Dill"

[report]
# Output format: text or json
format = "text"

# Fail if a file from history is missing in the working tree
verify = true
"#
}

#[cfg(test)]
mod tests;
