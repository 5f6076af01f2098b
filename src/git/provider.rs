//! History provider interface
//!
//! The attribution engine never opens a repository itself; it consumes
//! decoded commit records from a provider.

use crate::models::CommitRecord;
use anyhow::Result;

/// Lazily yielded commit records.
pub type CommitStream<'a> = Box<dyn Iterator<Item = Result<CommitRecord>> + 'a>;

/// Source of commits in causal order, earliest first, ending at the tip.
///
/// Each record's changes are relative to the previously yielded commit and
/// must already carry rename detection.
pub trait HistoryProvider {
    fn commits(&self) -> Result<CommitStream<'_>>;
}

/// In-memory histories.
impl HistoryProvider for [CommitRecord] {
    fn commits(&self) -> Result<CommitStream<'_>> {
        Ok(Box::new(self.iter().cloned().map(Ok::<_, anyhow::Error>)))
    }
}

impl HistoryProvider for Vec<CommitRecord> {
    fn commits(&self) -> Result<CommitStream<'_>> {
        self.as_slice().commits()
    }
}
