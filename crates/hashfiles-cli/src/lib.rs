//! hashfiles-cli library
//!
//! This module exposes the internal functionality of hashfiles-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub mod logging;
pub mod types;
pub use types::{Cli, Commands, HashArgs};

#[cfg(test)]
mod tests;
