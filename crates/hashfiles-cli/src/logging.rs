//! Logging setup
//!
//! Logs go to stderr so snapshots and JSON written to stdout stay clean.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for the given verbosity
#[must_use]
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise the default level
#[must_use]
pub fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Install the global subscriber
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(build_filter(verbose))
        .init();
}
