//! Streaming SHA-256 digests

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::HashError;
use crate::snapshot::Fingerprint;

/// Read buffer size used when none is configured
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Compute the SHA-256 fingerprint of a file
///
/// # Errors
/// Returns an error if the file is missing, unreadable, or not a regular file.
pub fn compute_file_hash(path: &Path) -> Result<Fingerprint, HashError> {
    compute_file_hash_with_chunk_size(path, DEFAULT_CHUNK_SIZE)
}

/// Compute the SHA-256 fingerprint of a file, reading `chunk_size` bytes at a time
///
/// The chunk size only affects memory use and the number of reads; the
/// resulting fingerprint is the same for any positive value.
///
/// # Errors
/// Returns an error if `chunk_size` is zero, or the file is missing,
/// unreadable, or not a regular file.
pub fn compute_file_hash_with_chunk_size(
    path: &Path,
    chunk_size: usize,
) -> Result<Fingerprint, HashError> {
    if chunk_size == 0 {
        return Err(HashError::InvalidChunkSize);
    }
    let file = open_regular_file(path)?;
    hash_reader(file, chunk_size).map_err(|e| HashError::from_io(e, path))
}

/// Hash everything `reader` yields until end of input
///
/// # Errors
/// Returns an error if `chunk_size` is zero or the reader fails.
pub fn hash_reader<R: Read>(mut reader: R, chunk_size: usize) -> io::Result<Fingerprint> {
    if chunk_size == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "chunk size must be greater than zero",
        ));
    }

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..read]);
    }
    Ok(Fingerprint::from(format!("{:x}", hasher.finalize())))
}

// Opening a directory succeeds on some platforms, so check the type up front.
fn open_regular_file(path: &Path) -> Result<File, HashError> {
    let file = File::open(path).map_err(|e| HashError::from_io(e, path))?;
    let metadata = file.metadata().map_err(|e| HashError::from_io(e, path))?;
    if !metadata.is_file() {
        return Err(HashError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(file)
}
