//! Status command: Compare a stored snapshot against the files on disk

use std::path::Path;

use anyhow::{Context, Result};
use hashfiles_core::{compare_files, load_snapshot, DiffResult, Hasher, HasherConfig};
use tracing::info;

use super::diff::print_diff;
use super::{discover_files, ensure_base_dir};

/// Run the status command
///
/// Re-hashes every file under `base` (skipping the snapshot file itself)
/// and reports what changed since the snapshot was taken.
///
/// # Errors
/// Returns an error if the snapshot cannot be loaded or a file cannot be hashed.
pub fn run(
    base: &Path,
    snapshot_path: &Path,
    json: bool,
    config: HasherConfig,
) -> Result<DiffResult> {
    info!(
        "Checking {} against {}",
        base.display(),
        snapshot_path.display()
    );

    ensure_base_dir(base)?;
    let stored = load_snapshot(snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;

    let paths = discover_files(base, Some(snapshot_path))?;
    let current = Hasher::with_config(base, config)?
        .hash_files(&paths)
        .with_context(|| format!("Failed to hash files under {}", base.display()))?;

    let result = compare_files(&stored, &current);
    info!(
        "{} files checked, {} changed",
        current.len(),
        result.total_changes()
    );
    print_diff(&result, json)?;
    Ok(result)
}
