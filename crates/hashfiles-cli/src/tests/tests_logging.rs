//! Tests for logging setup
//!
//! The global subscriber can only be installed once per process, so these
//! tests exercise the filter construction rather than `setup_logging` itself.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::logging::{build_filter, default_level};

#[test]
fn test_default_level_is_info() {
    assert_eq!(default_level(false), "info");
}

#[test]
fn test_verbose_uses_debug_level() {
    assert_eq!(default_level(true), "debug");
}

#[test]
fn test_default_levels_are_valid_filters() {
    for verbose in [false, true] {
        let filter = EnvFilter::new(default_level(verbose));
        let filter_str = format!("{filter:?}").to_lowercase();
        assert!(
            filter_str.contains(default_level(verbose)),
            "Filter {filter_str} should contain level {}",
            default_level(verbose)
        );
    }
}

#[test]
fn test_build_filter_does_not_panic() {
    let _quiet = build_filter(false);
    let _verbose = build_filter(true);
}

#[test]
fn test_stderr_layer_composes_with_filter() {
    let _subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new("hashfiles_core=debug,info"));
}
