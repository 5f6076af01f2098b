//! History-walking attribution engine
//!
//! Consumes commits earliest-first and keeps, for every live path, the set of
//! contributors who touched it under its current identity and the time it was
//! first created. Renames carry both forward; every transition checks that the
//! path is (or is not) live and fails with an [`AttributionError`] otherwise.

use super::error::{AttributionError, AttributionResult};
use super::identity::IdentityResolver;
use crate::git::HistoryProvider;
use crate::models::{ChangeKind, ChangeRecord, CommitRecord, Identity};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

/// Ownership state produced by the engine.
///
/// `owners` and `created_on` always hold the same set of keys.
#[derive(Debug, Clone, Default)]
pub struct AttributionState {
    owners: HashMap<String, Identity>,
    created_on: HashMap<String, DateTime<FixedOffset>>,
    all_contributors: Identity,
    last_active: Option<DateTime<FixedOffset>>,
    commits_processed: usize,
}

impl AttributionState {
    /// Live path -> contributors who touched it.
    pub fn owners(&self) -> &HashMap<String, Identity> {
        &self.owners
    }

    /// Live path -> time the path was first added.
    pub fn created_on(&self) -> &HashMap<String, DateTime<FixedOffset>> {
        &self.created_on
    }

    /// Every contributor ever credited with an add or modify.
    pub fn all_contributors(&self) -> &Identity {
        &self.all_contributors
    }

    /// Last time the distinguished contributor committed, if ever.
    pub fn last_active(&self) -> Option<DateTime<FixedOffset>> {
        self.last_active
    }

    pub fn commits_processed(&self) -> usize {
        self.commits_processed
    }

    pub fn is_live(&self, path: &str) -> bool {
        self.owners.contains_key(path)
    }

    pub fn live_count(&self) -> usize {
        self.owners.len()
    }

    fn insert(&mut self, path: &str, owners: Identity, created_on: DateTime<FixedOffset>) {
        self.owners.insert(path.to_string(), owners);
        self.created_on.insert(path.to_string(), created_on);
    }

    fn remove(&mut self, path: &str) -> Option<(Identity, DateTime<FixedOffset>)> {
        let owners = self.owners.remove(path)?;
        let created_on = self.created_on.remove(path)?;
        Some((owners, created_on))
    }
}

/// Sequential attribution engine.
///
/// `process_commit` is the only mutator; commits must be fed in causal order.
pub struct AttributionEngine {
    resolver: IdentityResolver,
    state: AttributionState,
    first_commit: bool,
}

impl AttributionEngine {
    pub fn new(resolver: IdentityResolver) -> Self {
        Self {
            resolver,
            state: AttributionState::default(),
            first_commit: true,
        }
    }

    pub fn resolver(&self) -> &IdentityResolver {
        &self.resolver
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AttributionState {
        &self.state
    }

    /// Consume the engine and return its final state.
    pub fn finish(self) -> AttributionState {
        self.state
    }

    /// Apply every change of one commit.
    ///
    /// Changes within a commit touch disjoint paths, so their order does not
    /// matter. An error leaves the state partially updated; the walk must be
    /// abandoned.
    pub fn process_commit(&mut self, commit: &CommitRecord) -> AttributionResult<()> {
        if self.first_commit {
            if let Some(change) = commit.changes.iter().find(|c| c.kind != ChangeKind::Added) {
                return Err(AttributionError::FirstCommitNotAdded {
                    commit: commit.id.clone(),
                    path: change.new_path.clone(),
                    kind: change.kind,
                });
            }
        }
        check_rename_targets(commit)?;

        for change in &commit.changes {
            trace!("{} {} {}", commit.id, change.kind, change.new_path);
            match change.kind {
                ChangeKind::Added | ChangeKind::Modified => self.contribute(commit, change)?,
                ChangeKind::Renamed => self.rename(commit, change)?,
                ChangeKind::Deleted => self.delete(commit, &change.old_path)?,
                ChangeKind::Copied
                | ChangeKind::TypeChanged
                | ChangeKind::Conflicted
                | ChangeKind::Ignored
                | ChangeKind::Unmodified
                | ChangeKind::Untracked
                | ChangeKind::Unreadable => {
                    return Err(AttributionError::UnhandledChangeKind {
                        commit: commit.id.clone(),
                        path: change.new_path.clone(),
                        kind: change.kind,
                    });
                }
            }
        }

        self.first_commit = false;
        self.state.commits_processed += 1;
        Ok(())
    }

    /// Added or modified: credit the commit's identity to the path.
    fn contribute(&mut self, commit: &CommitRecord, change: &ChangeRecord) -> AttributionResult<()> {
        if change.old_path != change.new_path {
            return Err(AttributionError::PathMismatch {
                commit: commit.id.clone(),
                old_path: change.old_path.clone(),
                new_path: change.new_path.clone(),
                kind: change.kind,
            });
        }

        // The first commit seeds the whole tree under the distinguished identity.
        let identity = if self.first_commit {
            self.resolver.distinguished_identity().clone()
        } else {
            self.resolver.normalize(&commit.author)
        };
        let timestamp = commit
            .timestamp()
            .ok_or_else(|| AttributionError::InvalidTimestamp {
                commit: commit.id.clone(),
                epoch_seconds: commit.epoch_seconds,
                offset_minutes: commit.offset_minutes,
            })?;

        if identity.contains(self.resolver.distinguished()) {
            self.state.last_active = Some(match self.state.last_active {
                Some(previous) if previous > timestamp => previous,
                _ => timestamp,
            });
        }

        let path = change.new_path.as_str();
        if change.kind == ChangeKind::Added {
            if self.state.is_live(path) {
                return Err(AttributionError::PathAlreadyLive {
                    commit: commit.id.clone(),
                    path: path.to_string(),
                    kind: change.kind,
                });
            }
            self.state.insert(path, identity.clone(), timestamp);
        } else {
            let owners = self.state.owners.get_mut(path).ok_or_else(|| {
                AttributionError::PathNotLive {
                    commit: commit.id.clone(),
                    path: path.to_string(),
                    kind: change.kind,
                }
            })?;
            owners.merge(&identity);
        }

        self.state.all_contributors.merge(&identity);
        Ok(())
    }

    /// Renamed: move ownership and creation time verbatim.
    fn rename(&mut self, commit: &CommitRecord, change: &ChangeRecord) -> AttributionResult<()> {
        if self.state.is_live(&change.new_path) {
            return Err(AttributionError::PathAlreadyLive {
                commit: commit.id.clone(),
                path: change.new_path.clone(),
                kind: ChangeKind::Renamed,
            });
        }

        let (owners, created_on) =
            self.state
                .remove(&change.old_path)
                .ok_or_else(|| AttributionError::PathNotLive {
                    commit: commit.id.clone(),
                    path: change.old_path.clone(),
                    kind: ChangeKind::Renamed,
                })?;

        debug!(
            "{}: {} -> {} ({})",
            commit.id, change.old_path, change.new_path, owners
        );
        self.state.insert(&change.new_path, owners, created_on);
        Ok(())
    }

    fn delete(&mut self, commit: &CommitRecord, path: &str) -> AttributionResult<()> {
        self.state
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| AttributionError::PathNotLive {
                commit: commit.id.clone(),
                path: path.to_string(),
                kind: ChangeKind::Deleted,
            })
    }
}

/// Reject renames whose destination is deleted or renamed away in the same
/// commit; the outcome would depend on change order.
fn check_rename_targets(commit: &CommitRecord) -> AttributionResult<()> {
    let removed: HashSet<&str> = commit
        .changes
        .iter()
        .filter(|c| matches!(c.kind, ChangeKind::Deleted | ChangeKind::Renamed))
        .map(|c| c.old_path.as_str())
        .collect();

    match commit
        .changes
        .iter()
        .filter(|c| c.kind == ChangeKind::Renamed)
        .find(|c| removed.contains(c.new_path.as_str()))
    {
        Some(change) => Err(AttributionError::RenameOntoRemovedPath {
            commit: commit.id.clone(),
            old_path: change.old_path.clone(),
            new_path: change.new_path.clone(),
        }),
        None => Ok(()),
    }
}

/// Walk a whole history and return the final state.
pub fn walk<H>(history: &H, resolver: IdentityResolver) -> Result<AttributionState>
where
    H: HistoryProvider + ?Sized,
{
    walk_with_progress(history, resolver, |_| {})
}

/// Walk a whole history, calling `on_commit` after each processed commit.
pub fn walk_with_progress<H, F>(
    history: &H,
    resolver: IdentityResolver,
    mut on_commit: F,
) -> Result<AttributionState>
where
    H: HistoryProvider + ?Sized,
    F: FnMut(&CommitRecord),
{
    let mut engine = AttributionEngine::new(resolver);

    for commit in history.commits()? {
        let commit = commit.context("Failed to read commit from history")?;
        engine.process_commit(&commit)?;
        on_commit(&commit);
    }

    let state = engine.finish();
    info!(
        "Processed {} commits: {} live files, {} contributors",
        state.commits_processed(),
        state.live_count(),
        state.all_contributors().len()
    );
    Ok(state)
}
