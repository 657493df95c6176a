//! hashfiles-core: Content fingerprints and snapshot comparison
//!
//! Hashes a list of files relative to a base directory into a [`Snapshot`]
//! (relative path to SHA-256 fingerprint), and compares two snapshots to
//! classify every path as unchanged, updated, new, or deleted.
//!
//! # Example
//!
//! ```no_run
//! use hashfiles_core::{compare_files, Hasher};
//!
//! # fn main() -> Result<(), hashfiles_core::HashError> {
//! let hasher = Hasher::new("/srv/site");
//! let before = hasher.hash_files(["index.html", "style.css"])?;
//! // ... files change on disk ...
//! let after = hasher.hash_files(["index.html", "style.css"])?;
//!
//! let diff = compare_files(&before, &after);
//! if !diff.is_uptodate {
//!     println!("updated: {:?}", diff.updated);
//! }
//! # Ok(())
//! # }
//! ```

pub mod diff;
pub mod hasher;
pub mod scanner;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{compare_files, DiffResult};
pub use hasher::{
    compute_file_hash, compute_file_hash_with_chunk_size, hash_reader, HashError, HashFailure,
    HashOutcome, Hasher, HasherConfig, DEFAULT_CHUNK_SIZE,
};
pub use scanner::Scanner;
pub use snapshot::{
    load_snapshot, read_snapshot, save_snapshot, write_snapshot, Fingerprint, Snapshot,
    SnapshotError,
};
