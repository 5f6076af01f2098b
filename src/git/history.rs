//! Git history extraction using libgit2
//!
//! Walks the repository from its first commit to HEAD and decodes every
//! commit into a [`CommitRecord`] with rename-aware change lists, using the
//! git2 crate (Rust bindings to libgit2).

use super::provider::{CommitStream, HistoryProvider};
use crate::models::{ChangeKind, ChangeRecord, CommitRecord};
use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use git2::{Delta, DiffFindOptions, Oid, Repository, Sort};
use std::path::Path;
use tracing::debug;

/// Git history reader using libgit2.
pub struct GitHistory {
    repo: Repository,
}

impl GitHistory {
    /// Open a git repository.
    ///
    /// # Arguments
    /// * `path` - Path to the repository (or any subdirectory)
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .with_context(|| format!("Failed to open git repository at {:?}", path))?;
        debug!("Opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Check if a path is inside a git repository.
    pub fn is_git_repo(path: &Path) -> bool {
        Repository::discover(path).is_ok()
    }

    /// Get the repository root path.
    pub fn repo_root(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .context("Repository has no working directory (bare repo?)")
    }

    /// Decode one commit, diffing its tree against the previously walked tree.
    fn commit_record(&self, commit: &git2::Commit, previous_tree: Option<Oid>) -> Result<CommitRecord> {
        let tree = commit.tree()?;
        let parent_tree = previous_tree
            .map(|id| self.repo.find_tree(id))
            .transpose()?;

        if commit.parent_count() > 1 {
            debug!("{}: merge commit, diffing against previous commit in walk", commit.id());
        }

        let mut diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut find_opts = DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let changes = diff
            .deltas()
            .map(|delta| {
                let old_path = delta.old_file().path().or(delta.new_file().path());
                let new_path = delta.new_file().path().or(delta.old_file().path());
                ChangeRecord {
                    old_path: old_path.map(path_string).unwrap_or_default(),
                    new_path: new_path.map(path_string).unwrap_or_default(),
                    kind: change_kind(delta.status()),
                }
            })
            .collect();

        let author = commit.author();
        let when = author.when();

        Ok(CommitRecord {
            id: commit.id().to_string(),
            author: author_name(commit, &author),
            epoch_seconds: when.seconds(),
            offset_minutes: when.offset_minutes(),
            changes,
        })
    }
}

impl HistoryProvider for GitHistory {
    fn commits(&self) -> Result<CommitStream<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME | Sort::REVERSE)?;
        revwalk
            .push_head()
            .context("Failed to resolve HEAD (empty repository?)")?;

        let mut previous_tree: Option<Oid> = None;
        Ok(Box::new(revwalk.map(move |oid| -> Result<CommitRecord> {
            let commit = self.repo.find_commit(oid?)?;
            let record = self.commit_record(&commit, previous_tree)?;
            previous_tree = Some(commit.tree_id());
            Ok(record)
        })))
    }
}

/// Map a libgit2 delta status onto a change kind.
fn change_kind(status: Delta) -> ChangeKind {
    match status {
        Delta::Added => ChangeKind::Added,
        Delta::Modified => ChangeKind::Modified,
        Delta::Renamed => ChangeKind::Renamed,
        Delta::Deleted => ChangeKind::Deleted,
        Delta::Copied => ChangeKind::Copied,
        Delta::Typechange => ChangeKind::TypeChanged,
        Delta::Conflicted => ChangeKind::Conflicted,
        Delta::Ignored => ChangeKind::Ignored,
        Delta::Unmodified => ChangeKind::Unmodified,
        Delta::Untracked => ChangeKind::Untracked,
        Delta::Unreadable => ChangeKind::Unreadable,
    }
}

/// Decode the author name with the commit's `encoding` header (UTF-8 when
/// absent). Unknown labels and invalid bytes fall back to lossy UTF-8.
fn author_name(commit: &git2::Commit, author: &git2::Signature) -> String {
    let bytes = author.name_bytes();
    if let Ok(name) = std::str::from_utf8(bytes) {
        return name.to_string();
    }

    let encoding = commit
        .message_encoding()
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (name, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        debug!("{}: author name is not valid {}", commit.id(), encoding.name());
    }
    name.into_owned()
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
