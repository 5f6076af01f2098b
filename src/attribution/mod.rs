//! Ownership attribution
//!
//! Walks a linear history earliest-first and attributes every live file to
//! the contributors who touched it, then classifies each file relative to the
//! distinguished contributor's period of activity.
//!
//! # Example
//!
//! ```no_run
//! use gitowners::attribution::{build_report, walk, IdentityResolver};
//! use gitowners::git::GitHistory;
//! use std::path::Path;
//!
//! let history = GitHistory::open(Path::new("/path/to/repo")).unwrap();
//! let resolver = IdentityResolver::default();
//! let state = walk(&history, resolver.clone()).unwrap();
//! let report = build_report(&state, &resolver, Some(history.repo_root().unwrap())).unwrap();
//! println!("{} files", report.files.len());
//! ```

pub mod classifier;
pub mod engine;
pub mod error;
pub mod identity;
pub mod report;

pub use classifier::classify;
pub use engine::{walk, walk_with_progress, AttributionEngine, AttributionState};
pub use error::{AttributionError, AttributionResult};
pub use identity::{title_case, IdentityResolver};
pub use report::build_report;
