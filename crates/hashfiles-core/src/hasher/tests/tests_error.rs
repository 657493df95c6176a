//! Tests for hashing errors

use std::io;
use std::path::Path;

use crate::hasher::HashError;

#[test]
fn test_from_io_not_found() {
    let err = HashError::from_io(io::Error::from(io::ErrorKind::NotFound), "/data/a.txt");
    assert!(matches!(err, HashError::NotFound { .. }));
    assert_eq!(err.path(), Some(Path::new("/data/a.txt")));
}

#[test]
fn test_from_io_permission_denied() {
    let err = HashError::from_io(
        io::Error::from(io::ErrorKind::PermissionDenied),
        "/data/secret.txt",
    );
    assert!(matches!(err, HashError::PermissionDenied { .. }));
}

#[test]
fn test_from_io_other_kind_keeps_source() {
    let err = HashError::from_io(io::Error::other("disk on fire"), "/data/a.txt");
    match &err {
        HashError::Io { source, .. } => assert_eq!(source.to_string(), "disk on fire"),
        other => unreachable!("unexpected variant: {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_display_names_path() {
    let err = HashError::NotFound {
        path: "/data/a.txt".into(),
    };
    assert_eq!(err.to_string(), "File not found: /data/a.txt");

    let err = HashError::PermissionDenied {
        path: "/data/b.txt".into(),
    };
    assert_eq!(err.to_string(), "Permission denied reading /data/b.txt");

    let err = HashError::NotAFile {
        path: "/data/dir".into(),
    };
    assert_eq!(err.to_string(), "Not a regular file: /data/dir");
}

#[test]
fn test_invalid_chunk_size_has_no_path() {
    assert_eq!(HashError::InvalidChunkSize.path(), None);
}
