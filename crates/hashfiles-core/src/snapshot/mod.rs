//! Snapshot module: Point-in-time fingerprints of a file set
//!
//! A [`Snapshot`] maps relative file paths to the [`Fingerprint`] of their
//! content. Snapshots can be written to and read back from a line-oriented
//! text format so a later run has something to compare against.

mod model;
mod persist;

pub use model::{Fingerprint, Iter, Snapshot};
pub use persist::{
    load_snapshot, read_snapshot, save_snapshot, write_snapshot, SnapshotError, FORMAT_HEADER,
};
