//! Tracing setup for the CLI.
//!
//! Logs always go to stderr; stdout carries only the probe transcript.

use tracing_subscriber::EnvFilter;

/// Variable consulted before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "CAPPROBE_LOG";

/// Resolve the log filter.
///
/// Order: `CAPPROBE_LOG`, `RUST_LOG`, then `debug` with `--verbose` or
/// `error` without.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "error" };
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
