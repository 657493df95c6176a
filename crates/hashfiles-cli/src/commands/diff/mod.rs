//! Diff command: Compare two snapshot files

use std::path::Path;

use anyhow::{Context, Result};
use hashfiles_core::{compare_files, load_snapshot, DiffResult};
use tracing::info;

/// Run the diff command
///
/// # Errors
/// Returns an error if either snapshot cannot be loaded.
pub fn run(current: &Path, new: &Path, json: bool) -> Result<DiffResult> {
    info!("Comparing {} to {}", current.display(), new.display());

    let current_snapshot = load_snapshot(current)
        .with_context(|| format!("Failed to load snapshot {}", current.display()))?;
    let new_snapshot = load_snapshot(new)
        .with_context(|| format!("Failed to load snapshot {}", new.display()))?;

    let result = compare_files(&current_snapshot, &new_snapshot);
    print_diff(&result, json)?;
    Ok(result)
}

/// Print a diff to stdout as text or JSON
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn print_diff(result: &DiffResult, json: bool) -> Result<()> {
    let output = if json {
        render_json(result)?
    } else {
        render_text(result)
    };
    print!("{output}");
    Ok(())
}

/// Render a diff as human-readable text
#[must_use]
pub fn render_text(result: &DiffResult) -> String {
    if result.is_uptodate {
        return "up to date\n".to_string();
    }

    let mut lines = Vec::new();
    for (label, paths) in [
        ("updated", &result.updated),
        ("deleted", &result.deleted),
        ("new", &result.new),
    ] {
        if paths.is_empty() {
            continue;
        }
        lines.push(format!("{label}:"));
        lines.extend(paths.iter().map(|path| format!("  {path}")));
    }
    lines.push(format!(
        "{} updated, {} deleted, {} new",
        result.updated.len(),
        result.deleted.len(),
        result.new.len()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a diff as pretty-printed JSON
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render_json(result: &DiffResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result).context("Failed to serialize diff")?;
    json.push('\n');
    Ok(json)
}
