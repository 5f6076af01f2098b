//! Configuration module for gitowners
//!
//! This module handles:
//! - Project-level configuration (gitowners.toml / .gitownersrc.json)
//! - The distinguished contributor and alias rule
//! - Report defaults

mod project_config;

pub use project_config::{
    example_config,
    load_project_config,
    IdentityConfig,
    ProjectConfig,
    ReportDefaults,
    CONFIG_FILE_NAMES,
};
