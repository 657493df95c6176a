//! Snapshot model types

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hex-encoded content digest of a single file
///
/// Two fingerprints are equal exactly when their strings are equal. Values
/// produced by the hasher are always 64 lowercase hex characters (SHA-256).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Length of a hex-encoded SHA-256 digest
    pub const HEX_LEN: usize = 64;

    /// Parse a hex digest as written by the hasher
    ///
    /// Returns `None` unless the input is exactly [`Self::HEX_LEN`]
    /// lowercase hex characters.
    #[must_use]
    pub fn parse(hex: &str) -> Option<Self> {
        let valid = hex.len() == Self::HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        valid.then(|| Self(hex.to_owned()))
    }

    /// Get the hex string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fingerprint {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Fingerprint {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable mapping from relative file path to content fingerprint
///
/// Iteration is ordered by path. Building a snapshot from pairs that repeat
/// a path keeps the last fingerprint seen for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, Fingerprint>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of paths in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no paths
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fingerprint recorded for `path`, if any
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Fingerprint> {
        self.entries.get(path)
    }

    /// Whether the snapshot has an entry for `path`
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over `(path, fingerprint)` pairs in path order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over the recorded paths in order
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<P, F> FromIterator<(P, F)> for Snapshot
where
    P: Into<String>,
    F: Into<Fingerprint>,
{
    fn from_iter<T: IntoIterator<Item = (P, F)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(path, fingerprint)| (path.into(), fingerprint.into()))
                .collect(),
        }
    }
}

/// Iterator over the entries of a [`Snapshot`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Fingerprint>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Fingerprint);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(path, fingerprint)| (path.as_str(), fingerprint))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = (&'a str, &'a Fingerprint);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
