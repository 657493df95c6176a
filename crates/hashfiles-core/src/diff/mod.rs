//! Diff module: Classify changes between two snapshots

mod compare;
mod result;

pub use compare::compare_files;
pub use result::DiffResult;
