//! Diff result type

use serde::{Deserialize, Serialize};

/// Outcome of comparing a current snapshot against a newer one
///
/// `is_uptodate` is true exactly when all three lists are empty. A path
/// appears in at most one list; paths present in both snapshots with the
/// same fingerprint appear in none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub is_uptodate: bool,
    /// Present in both snapshots with different fingerprints
    pub updated: Vec<String>,
    /// Present only in the current snapshot
    pub deleted: Vec<String>,
    /// Present only in the new snapshot
    pub new: Vec<String>,
}

impl DiffResult {
    /// Total number of changed paths
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.updated.len() + self.deleted.len() + self.new.len()
    }

    /// Split into `(is_uptodate, updated, deleted, new)`
    #[must_use]
    pub fn into_parts(self) -> (bool, Vec<String>, Vec<String>, Vec<String>) {
        (self.is_uptodate, self.updated, self.deleted, self.new)
    }
}
