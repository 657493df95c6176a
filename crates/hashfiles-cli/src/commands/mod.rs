//! CLI commands

pub mod diff;
pub mod hash;
pub mod status;

use std::path::Path;

use anyhow::{bail, Context, Result};
use hashfiles_core::{DiffResult, Scanner};

/// Process exit status for a comparison: 0 when up to date, 1 otherwise
#[must_use]
pub fn exit_status(result: &DiffResult) -> u8 {
    u8::from(!result.is_uptodate)
}

/// Fail unless `base` is an existing directory
pub(crate) fn ensure_base_dir(base: &Path) -> Result<()> {
    if !base.is_dir() {
        bail!("Base directory not found: {}", base.display());
    }
    Ok(())
}

/// Discover every file under `base`, leaving out `exclude` when it lives there
///
/// Fails when part of the tree cannot be read, so unreadable files are never
/// mistaken for deleted ones.
pub(crate) fn discover_files(base: &Path, exclude: Option<&Path>) -> Result<Vec<String>> {
    let excludes = exclude
        .and_then(|file| relative_within(base, file))
        .into_iter()
        .collect();
    Scanner::new(base)
        .with_excludes(excludes)
        .scan_all()
        .with_context(|| format!("Failed to discover files under {}", base.display()))
}

/// `file` relative to `base` with `/` separators, if it lies under `base`
///
/// `file` does not need to exist yet, but its parent directory does.
pub(crate) fn relative_within(base: &Path, file: &Path) -> Option<String> {
    let base = base.canonicalize().ok()?;
    let file = match file.canonicalize() {
        Ok(path) => path,
        Err(_) => {
            let parent = match file.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            parent.canonicalize().ok()?.join(file.file_name()?)
        }
    };
    let relative = file.strip_prefix(&base).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect();
    Some(parts?.join("/"))
}
