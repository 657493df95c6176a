//! Hash command: Fingerprint files and write a snapshot

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hashfiles_core::{save_snapshot, write_snapshot, Hasher, HasherConfig, Snapshot};
use tracing::info;

use super::{discover_files, ensure_base_dir};

/// Run the hash command
///
/// With no `paths`, every file under `base` is hashed (except `output`
/// itself), and an unreadable directory fails discovery. Without
/// `keep_going` the first unreadable file aborts the run and no snapshot is
/// written. With it, the snapshot of the readable files
/// is written, the failures are listed, and the command still fails.
///
/// # Errors
/// Returns an error if the base directory is missing, a file cannot be
/// hashed, or the snapshot cannot be written.
pub fn run(
    base: &Path,
    paths: &[String],
    output: Option<&Path>,
    keep_going: bool,
    config: HasherConfig,
) -> Result<()> {
    info!("Hashing files under {}", base.display());

    ensure_base_dir(base)?;
    let hasher = Hasher::with_config(base, config)?;
    let paths = if paths.is_empty() {
        discover_files(base, output)?
    } else {
        paths.to_vec()
    };
    info!("Found {} files to hash", paths.len());

    if keep_going {
        let outcome = hasher.hash_files_lenient(&paths);
        write_output(&outcome.snapshot, output)?;
        if !outcome.is_complete() {
            for failure in &outcome.failures {
                eprintln!("failed: {}: {}", failure.path, failure.error);
            }
            bail!(
                "{} of {} files could not be hashed",
                outcome.failures.len(),
                paths.len()
            );
        }
        return Ok(());
    }

    let snapshot = hasher
        .hash_files(&paths)
        .context("Hashing aborted, no snapshot written")?;
    write_output(&snapshot, output)
}

fn write_output(snapshot: &Snapshot, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            save_snapshot(path, snapshot)
                .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
            info!("✓ Wrote snapshot of {} files to {}", snapshot.len(), path.display());
        }
        None => {
            write_snapshot(&mut io::stdout().lock(), snapshot)
                .context("Failed to write snapshot to stdout")?;
        }
    }
    Ok(())
}
