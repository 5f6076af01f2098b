//! Build the ownership report from the engine's final state

use super::classifier::classify;
use super::engine::AttributionState;
use super::error::{AttributionError, AttributionResult};
use super::identity::IdentityResolver;
use crate::models::{FileOwnership, OwnershipReport};
use std::path::Path;
use tracing::debug;

/// Classify every live path and assemble the report.
///
/// When `workdir` is given every live path must exist under it; a missing
/// file means the history and the working tree disagree.
pub fn build_report(
    state: &AttributionState,
    resolver: &IdentityResolver,
    workdir: Option<&Path>,
) -> AttributionResult<OwnershipReport> {
    let last_active = state
        .last_active()
        .ok_or_else(|| AttributionError::DistinguishedNeverSeen {
            name: resolver.distinguished().to_string(),
        })?;
    let distinguished = resolver.distinguished_identity();

    let mut paths: Vec<&String> = state.owners().keys().collect();
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        if let Some(root) = workdir {
            if !root.join(path).exists() {
                return Err(AttributionError::MissingFromWorkdir { path: path.clone() });
            }
        }

        let owners = &state.owners()[path];
        let created_on = state.created_on()[path];
        let ownership = classify(owners, created_on, last_active, distinguished);
        debug!("{}: {} ({})", path, ownership, owners);

        files.push(FileOwnership {
            ownership,
            path: path.clone(),
            created_on,
            owners: owners.clone(),
        });
    }

    Ok(OwnershipReport {
        distinguished: resolver.distinguished().to_string(),
        last_active,
        contributors: state.all_contributors().names().map(str::to_string).collect(),
        files,
    })
}
