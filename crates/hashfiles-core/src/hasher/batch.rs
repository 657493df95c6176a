//! Batch hashing of relative paths under a base directory

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::digest::{compute_file_hash_with_chunk_size, DEFAULT_CHUNK_SIZE};
use super::HashError;
use crate::snapshot::{Fingerprint, Snapshot};

/// Configuration for a [`Hasher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HasherConfig {
    /// Bytes read per call; trades memory use against read count
    pub chunk_size: usize,
    /// Hash files concurrently on the rayon thread pool
    pub parallel: bool,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel: false,
        }
    }
}

impl HasherConfig {
    /// Set the read chunk size
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Enable or disable parallel hashing
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// A path that could not be hashed in a lenient batch
#[derive(Debug)]
pub struct HashFailure {
    /// The relative path as given by the caller
    pub path: String,
    pub error: HashError,
}

/// Result of a lenient batch: the files that hashed, and the ones that did not
#[derive(Debug, Default)]
pub struct HashOutcome {
    pub snapshot: Snapshot,
    pub failures: Vec<HashFailure>,
}

impl HashOutcome {
    /// Whether every requested path was hashed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fingerprints files given as paths relative to a base directory
#[derive(Debug, Clone)]
pub struct Hasher {
    base: PathBuf,
    config: HasherConfig,
}

impl Hasher {
    /// Create a hasher for `base` with the default configuration
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            config: HasherConfig::default(),
        }
    }

    /// Create a hasher for `base` with an explicit configuration
    ///
    /// # Errors
    /// Returns [`HashError::InvalidChunkSize`] if the chunk size is zero.
    pub fn with_config(base: impl Into<PathBuf>, config: HasherConfig) -> Result<Self, HashError> {
        if config.chunk_size == 0 {
            return Err(HashError::InvalidChunkSize);
        }
        Ok(Self {
            base: base.into(),
            config,
        })
    }

    /// Get the base directory
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Get the hashing configuration
    #[must_use]
    pub fn config(&self) -> HasherConfig {
        self.config
    }

    /// Fingerprint a single file given relative to the base directory
    ///
    /// # Errors
    /// Returns an error naming the full path if the file cannot be hashed.
    pub fn hash_file(&self, relative: &str) -> Result<Fingerprint, HashError> {
        let full_path = self.base.join(relative);
        let fingerprint = compute_file_hash_with_chunk_size(&full_path, self.config.chunk_size)?;
        debug!("Hashed {} ({})", relative, fingerprint);
        Ok(fingerprint)
    }

    /// Fingerprint every path and collect the results into a snapshot
    ///
    /// The whole batch fails on the first path (in input order) that cannot
    /// be hashed, so a returned snapshot always covers every requested path.
    /// When a path is listed more than once, its last occurrence wins.
    ///
    /// # Errors
    /// Returns the error of the first path that could not be hashed.
    pub fn hash_files<I, S>(&self, paths: I) -> Result<Snapshot, HashError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = collect_paths(paths);
        let snapshot = if self.config.parallel {
            let results = self.hash_parallel(&paths);
            paths
                .into_iter()
                .zip(results)
                .map(|(path, result)| result.map(|fingerprint| (path, fingerprint)))
                .collect::<Result<Snapshot, _>>()?
        } else {
            paths
                .into_iter()
                .map(|path| {
                    let fingerprint = self.hash_file(&path)?;
                    Ok((path, fingerprint))
                })
                .collect::<Result<Snapshot, HashError>>()?
        };

        info!(
            "Hashed {} files under {}",
            snapshot.len(),
            self.base.display()
        );
        Ok(snapshot)
    }

    /// Fingerprint every path, recording failures instead of aborting
    ///
    /// Paths that cannot be hashed are left out of the snapshot and listed
    /// in [`HashOutcome::failures`] in input order. Callers must check the
    /// failures before treating the snapshot as a full picture of the files.
    pub fn hash_files_lenient<I, S>(&self, paths: I) -> HashOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = collect_paths(paths);
        let results = if self.config.parallel {
            self.hash_parallel(&paths)
        } else {
            paths.iter().map(|path| self.hash_file(path)).collect()
        };

        let mut hashed = Vec::with_capacity(paths.len());
        let mut failures = Vec::new();
        for (path, result) in paths.into_iter().zip(results) {
            match result {
                Ok(fingerprint) => hashed.push((path, fingerprint)),
                Err(error) => {
                    warn!("Failed to hash {}: {}", path, error);
                    failures.push(HashFailure { path, error });
                }
            }
        }

        let outcome = HashOutcome {
            snapshot: hashed.into_iter().collect(),
            failures,
        };
        info!(
            "Hashed {} files under {} ({} failed)",
            outcome.snapshot.len(),
            self.base.display(),
            outcome.failures.len()
        );
        outcome
    }

    // Results come back in the same order as `paths`.
    fn hash_parallel(&self, paths: &[String]) -> Vec<Result<Fingerprint, HashError>> {
        paths.par_iter().map(|path| self.hash_file(path)).collect()
    }
}

fn collect_paths<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|path| path.as_ref().to_owned())
        .collect()
}
