//! File walker: Discovers files in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::warn;

/// Scanner for discovering files to hash under a base directory
#[derive(Debug)]
pub struct Scanner {
    root: PathBuf,
    excludes: Vec<String>,
}

impl Scanner {
    /// Create a new scanner for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excludes: Vec::new(),
        }
    }

    /// Skip these relative paths (exact match, `/`-separated)
    #[must_use]
    pub fn with_excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    /// Scan the directory and return relative paths of discovered files
    ///
    /// Paths use `/` as the separator on every platform. Hidden files are
    /// included; the `.git` directory and anything matched by ignore files
    /// are not. Files whose names are not valid UTF-8 are skipped with a
    /// warning. A directory that cannot be read yields an error instead of
    /// being left out, since its files would otherwise look deleted.
    pub fn scan(&self) -> impl Iterator<Item = Result<String, ignore::Error>> + '_ {
        WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .filter_entry(|entry| entry.file_name() != ".git")
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                        return None;
                    }
                    self.relative_path(entry.path())
                        .filter(|relative| !self.excludes.contains(relative))
                        .map(Ok)
                }
                Err(err) => Some(Err(err)),
            })
    }

    /// Scan the directory, failing on the first walk error
    ///
    /// # Errors
    /// Returns an error if any directory under the root cannot be read.
    pub fn scan_all(&self) -> Result<Vec<String>, ignore::Error> {
        self.scan().collect()
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let mut parts = Vec::new();
        for component in relative.components() {
            match component.as_os_str().to_str() {
                Some(part) => parts.push(part),
                None => {
                    warn!("Skipping file with non UTF-8 name: {}", path.display());
                    return None;
                }
            }
        }
        Some(parts.join("/"))
    }
}
