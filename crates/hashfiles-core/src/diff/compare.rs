//! Snapshot comparison

use tracing::debug;

use super::DiffResult;
use crate::snapshot::Snapshot;

/// Compare a `current` (older) snapshot against a `new` one
///
/// Paths are reported in snapshot iteration order: `updated` and `new`
/// follow the order of `new`, `deleted` follows the order of `current`.
#[must_use]
pub fn compare_files(current: &Snapshot, new: &Snapshot) -> DiffResult {
    let mut is_uptodate = true;
    let mut updated = Vec::new();
    let mut deleted = Vec::new();
    let mut new_list = Vec::new();

    for (path, fingerprint) in new {
        match current.get(path) {
            Some(previous) if previous != fingerprint => {
                updated.push(path.to_owned());
                is_uptodate = false;
            }
            Some(_) => {}
            None => {
                new_list.push(path.to_owned());
                is_uptodate = false;
            }
        }
    }

    for path in current.paths() {
        if !new.contains(path) {
            deleted.push(path.to_owned());
            is_uptodate = false;
        }
    }

    debug!(
        "Compared snapshots: {} updated, {} deleted, {} new",
        updated.len(),
        deleted.len(),
        new_list.len()
    );

    DiffResult {
        is_uptodate,
        updated,
        deleted,
        new: new_list,
    }
}
