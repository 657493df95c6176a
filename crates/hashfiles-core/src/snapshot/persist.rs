//! Snapshot persistence: line-oriented text format
//!
//! ```text
//! # hashfiles snapshot v1 created 2026-10-19T12:00:00Z
//! <64 hex chars><two spaces><relative path>
//! ```
//!
//! Records are written in path order. The digest comes first and has a fixed
//! width, so the separator after it is unambiguous even when a path contains
//! spaces. Comment lines (`#`) and blank lines are skipped on read.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use tracing::debug;

use super::{Fingerprint, Snapshot};

/// First line written to every snapshot file
pub const FORMAT_HEADER: &str = "# hashfiles snapshot v1";

const FIELD_SEPARATOR: &str = "  ";

/// Errors that can occur while reading or writing snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot file {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot record at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Path contains a line break and cannot be stored in a snapshot: {path:?}")]
    UnrepresentablePath { path: String },
}

impl SnapshotError {
    fn at_file(self, path: &Path) -> Self {
        match self {
            Self::Io(source) => Self::File {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

/// Write a snapshot in the text format
///
/// Nothing is written when any path contains a line break.
///
/// # Errors
/// Returns an error if a path cannot be represented or the writer fails.
pub fn write_snapshot<W: Write>(writer: &mut W, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    ensure_representable(snapshot)?;

    let created = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    writeln!(writer, "{FORMAT_HEADER} created {created}")?;
    for (path, fingerprint) in snapshot {
        writeln!(writer, "{fingerprint}{FIELD_SEPARATOR}{path}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a snapshot from the text format
///
/// # Errors
/// Returns an error if reading fails or a record is malformed.
pub fn read_snapshot<R: BufRead>(reader: R) -> Result<Snapshot, SnapshotError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let record = parse_record(&line).map_err(|reason| SnapshotError::Parse {
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }
    Ok(records.into_iter().collect())
}

fn ensure_representable(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    match snapshot.paths().find(|p| p.contains(['\n', '\r'])) {
        Some(path) => Err(SnapshotError::UnrepresentablePath {
            path: path.to_owned(),
        }),
        None => Ok(()),
    }
}

fn parse_record(line: &str) -> Result<(String, Fingerprint), String> {
    let (digest, rest) = match (line.get(..Fingerprint::HEX_LEN), line.get(Fingerprint::HEX_LEN..))
    {
        (Some(digest), Some(rest)) => (digest, rest),
        _ => return Err("record does not start with a fingerprint".to_owned()),
    };
    let fingerprint = Fingerprint::parse(digest)
        .ok_or_else(|| format!("invalid fingerprint {digest:?}"))?;
    let path = rest
        .strip_prefix(FIELD_SEPARATOR)
        .ok_or_else(|| "missing separator after fingerprint".to_owned())?;
    if path.is_empty() {
        return Err("empty path".to_owned());
    }
    Ok((path.to_owned(), fingerprint))
}

/// Write a snapshot to a file, replacing any existing content
///
/// An existing file is left untouched when any path cannot be represented.
///
/// # Errors
/// Returns an error if a path cannot be represented or the file cannot be
/// created or written.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    ensure_representable(snapshot)?;
    let file = File::create(path).map_err(|e| SnapshotError::Io(e).at_file(path))?;
    let mut writer = BufWriter::new(file);
    write_snapshot(&mut writer, snapshot).map_err(|e| e.at_file(path))?;
    debug!("Saved snapshot of {} files to {}", snapshot.len(), path.display());
    Ok(())
}

/// Read a snapshot from a file
///
/// # Errors
/// Returns an error if the file cannot be opened or is malformed.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let file = File::open(path).map_err(|e| SnapshotError::Io(e).at_file(path))?;
    let snapshot = read_snapshot(BufReader::new(file)).map_err(|e| e.at_file(path))?;
    debug!("Loaded snapshot of {} files from {}", snapshot.len(), path.display());
    Ok(snapshot)
}
