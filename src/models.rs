//! Core data models for gitowners
//!
//! These models are shared between the history provider, the attribution
//! engine and the reporters.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A contributor identity: one or two canonical names.
///
/// The alias rule can attribute a single commit to two people at once, so an
/// identity is always a set and never a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(BTreeSet<String>);

impl Identity {
    /// Identity made of a single canonical name.
    pub fn single(name: impl Into<String>) -> Self {
        Self(BTreeSet::from([name.into()]))
    }

    /// Identity made of a primary name plus an optional co-attributed name.
    pub fn pair(primary: impl Into<String>, co_attributed: Option<&str>) -> Self {
        let mut names = BTreeSet::from([primary.into()]);
        if let Some(other) = co_attributed {
            names.insert(other.to_string());
        }
        Self(names)
    }

    /// Merge identities: set union of `other` into `self`.
    ///
    /// Idempotent and commutative; never an overwrite or an intersection.
    pub fn merge(&mut self, other: &Identity) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// True if the two identities share at least one name.
    pub fn intersects(&self, other: &Identity) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.names().collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Kind of a path-level change, as reported by the history provider.
///
/// Only the first four kinds can appear in a well-formed history; the rest
/// are representable so that the engine can reject them by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Modified,
    Renamed,
    Deleted,
    Copied,
    TypeChanged,
    Conflicted,
    Ignored,
    Unmodified,
    Untracked,
    Unreadable,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Copied => "copied",
            ChangeKind::TypeChanged => "typechange",
            ChangeKind::Conflicted => "conflicted",
            ChangeKind::Ignored => "ignored",
            ChangeKind::Unmodified => "unmodified",
            ChangeKind::Untracked => "untracked",
            ChangeKind::Unreadable => "unreadable",
        };
        write!(f, "{}", name)
    }
}

/// A single path-level change within a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub old_path: String,
    pub new_path: String,
    pub kind: ChangeKind,
}

impl ChangeRecord {
    pub fn added(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: path.clone(),
            new_path: path,
            kind: ChangeKind::Added,
        }
    }

    pub fn modified(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: path.clone(),
            new_path: path,
            kind: ChangeKind::Modified,
        }
    }

    pub fn deleted(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: path.clone(),
            new_path: path,
            kind: ChangeKind::Deleted,
        }
    }

    pub fn renamed(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            old_path: old_path.into(),
            new_path: new_path.into(),
            kind: ChangeKind::Renamed,
        }
    }
}

/// A decoded commit: author, author time and its changes relative to the
/// previously walked commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit hash (or any caller-chosen label for in-memory histories)
    pub id: String,
    /// Raw author display name
    pub author: String,
    /// Author time, seconds since the epoch
    pub epoch_seconds: i64,
    /// Author UTC offset in minutes
    pub offset_minutes: i32,
    pub changes: Vec<ChangeRecord>,
}

impl CommitRecord {
    /// Author time in the author's own offset, if representable.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        commit_timestamp(self.epoch_seconds, self.offset_minutes)
    }
}

/// Combine an epoch time with a UTC offset in minutes.
pub fn commit_timestamp(epoch_seconds: i64, offset_minutes: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_minutes.checked_mul(60)?)?;
    DateTime::from_timestamp(epoch_seconds, 0).map(|utc| utc.with_timezone(&offset))
}

/// Ownership label of a live path relative to the distinguished contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Only the distinguished identity ever touched the file
    Complete,
    /// The distinguished identity and someone else touched the file
    Partial,
    /// Never touched by them, but created before their last activity
    Inherited,
    /// Created after their last activity and never touched by them
    None,
}

impl Ownership {
    pub const ALL: [Ownership; 4] = [
        Ownership::Complete,
        Ownership::Partial,
        Ownership::Inherited,
        Ownership::None,
    ];
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Complete => write!(f, "Complete"),
            Ownership::Partial => write!(f, "Partial"),
            Ownership::Inherited => write!(f, "Inherited"),
            Ownership::None => write!(f, "None"),
        }
    }
}

impl std::str::FromStr for Ownership {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "complete" => Ok(Ownership::Complete),
            "partial" => Ok(Ownership::Partial),
            "inherited" => Ok(Ownership::Inherited),
            "none" => Ok(Ownership::None),
            _ => Err(anyhow::anyhow!(
                "Unknown ownership '{}'. Valid values: complete, partial, inherited, none",
                s
            )),
        }
    }
}

/// Write timestamps as RFC 3339 with a numeric offset, `+00:00` included.
fn serialize_rfc3339<S>(at: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&at.to_rfc3339())
}

/// Report record for one live path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOwnership {
    pub ownership: Ownership,
    pub path: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub created_on: DateTime<FixedOffset>,
    pub owners: Identity,
}

/// Final ownership report for a repository.
#[derive(Debug, Clone, Serialize)]
pub struct OwnershipReport {
    /// Distinguished contributor name
    pub distinguished: String,
    /// Last time the distinguished contributor committed
    #[serde(serialize_with = "serialize_rfc3339")]
    pub last_active: DateTime<FixedOffset>,
    /// Every contributor ever seen, sorted
    pub contributors: Vec<String>,
    /// One record per live path, sorted by path
    pub files: Vec<FileOwnership>,
}

impl OwnershipReport {
    /// Number of files per label, in label order.
    pub fn summary(&self) -> Vec<(Ownership, usize)> {
        Ownership::ALL
            .iter()
            .map(|label| {
                let count = self.files.iter().filter(|f| f.ownership == *label).count();
                (*label, count)
            })
            .collect()
    }

    /// Keep only files carrying one of `labels`.
    pub fn retain_labels(&mut self, labels: &[Ownership]) {
        self.files.retain(|f| labels.contains(&f.ownership));
    }
}
