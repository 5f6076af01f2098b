//! Git history access
//!
//! Provides the commit stream consumed by the attribution engine:
//!
//! - [`HistoryProvider`]: ordered, lazily decoded commit records
//! - [`GitHistory`]: libgit2-backed provider with rename detection

pub mod history;
pub mod provider;

pub use history::GitHistory;
pub use provider::{CommitStream, HistoryProvider};
