//! Scanner module: File discovery
//!
//! Walks a base directory, respecting .gitignore, and yields the relative
//! paths of regular files for the hasher.

mod walker;

pub use walker::Scanner;

#[cfg(test)]
mod tests;
