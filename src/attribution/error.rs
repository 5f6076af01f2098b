//! Fatal conditions of an attribution run

use crate::models::ChangeKind;
use thiserror::Error;

/// Errors raised by the attribution engine and report builder.
///
/// Every variant is fatal: the history shape is unsupported or the final
/// state disagrees with the working tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributionError {
    #[error("commit {commit}: cannot {kind} '{path}', the path is already live")]
    PathAlreadyLive {
        commit: String,
        path: String,
        kind: ChangeKind,
    },

    #[error("commit {commit}: cannot apply {kind} to '{path}', the path is not live")]
    PathNotLive {
        commit: String,
        path: String,
        kind: ChangeKind,
    },

    #[error("commit {commit}: {kind} change moves '{old_path}' to '{new_path}'")]
    PathMismatch {
        commit: String,
        old_path: String,
        new_path: String,
        kind: ChangeKind,
    },

    #[error("commit {commit}: first commit must only add files, found {kind} for '{path}'")]
    FirstCommitNotAdded {
        commit: String,
        path: String,
        kind: ChangeKind,
    },

    #[error("commit {commit}: '{old_path}' is renamed onto '{new_path}', which the same commit removes")]
    RenameOntoRemovedPath {
        commit: String,
        old_path: String,
        new_path: String,
    },

    #[error("commit {commit}: unhandled change kind {kind} for '{path}'")]
    UnhandledChangeKind {
        commit: String,
        path: String,
        kind: ChangeKind,
    },

    #[error("commit {commit}: author time {epoch_seconds} with offset {offset_minutes}min is out of range")]
    InvalidTimestamp {
        commit: String,
        epoch_seconds: i64,
        offset_minutes: i32,
    },

    #[error("{name} never committed to this history")]
    DistinguishedNeverSeen { name: String },

    #[error("'{path}' is live in history but missing from the working tree")]
    MissingFromWorkdir { path: String },
}

pub type AttributionResult<T> = Result<T, AttributionError>;
