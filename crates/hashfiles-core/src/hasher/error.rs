//! Hashing errors

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while fingerprinting files
///
/// Every file-level variant carries the path that failed so the caller can
/// report or retry exactly that file.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied reading {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Not a regular file: {}", .path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,
}

impl HashError {
    /// Classify an I/O error raised while opening or reading `path`
    #[must_use]
    pub fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// The file this error refers to, if any
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotAFile { path }
            | Self::Io { path, .. } => Some(path),
            Self::InvalidChunkSize => None,
        }
    }
}
