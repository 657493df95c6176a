//! Hasher module: Content fingerprints for files
//!
//! Streams each file through SHA-256 in fixed-size chunks and collects the
//! results into a [`Snapshot`](crate::snapshot::Snapshot) keyed by the
//! path relative to a base directory.

mod batch;
mod digest;
mod error;

pub use batch::{HashFailure, HashOutcome, Hasher, HasherConfig};
pub use digest::{
    compute_file_hash, compute_file_hash_with_chunk_size, hash_reader, DEFAULT_CHUNK_SIZE,
};
pub use error::HashError;

#[cfg(test)]
mod tests;
