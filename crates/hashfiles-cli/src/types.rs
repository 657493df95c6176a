//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hashfiles_core::{HasherConfig, DEFAULT_CHUNK_SIZE};

#[derive(Parser, Debug)]
#[command(name = "hashfiles")]
#[command(author, version, about = "Fingerprint files and detect changes between snapshots", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash files under a directory and write a snapshot
    Hash {
        /// Base directory the paths are relative to
        base: PathBuf,

        /// Relative paths to hash (default: every file under BASE)
        paths: Vec<String>,

        /// Write the snapshot to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record unreadable files and keep hashing the rest
        #[arg(long)]
        keep_going: bool,

        #[command(flatten)]
        hashing: HashArgs,
    },

    /// Compare two snapshot files
    Diff {
        /// Older snapshot
        current: PathBuf,

        /// Newer snapshot
        new: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare a stored snapshot against the files on disk
    Status {
        /// Base directory to re-hash
        base: PathBuf,

        /// Snapshot to compare against
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        hashing: HashArgs,
    },
}

/// Hashing options shared by commands that read files
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashArgs {
    /// Bytes read per chunk while hashing
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Hash files in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl HashArgs {
    #[must_use]
    pub fn to_config(self) -> HasherConfig {
        HasherConfig::default()
            .with_chunk_size(self.chunk_size)
            .with_parallel(self.parallel)
    }
}
