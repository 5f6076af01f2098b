//! gitowners - per-file ownership attribution from git history
//!
//! Walks a repository's history earliest-first, tracks which contributors
//! touched every file (following renames), and labels each file at the tip
//! relative to one distinguished contributor's period of activity.

pub mod attribution;
pub mod config;
pub mod git;
pub mod models;
pub mod reporters;
