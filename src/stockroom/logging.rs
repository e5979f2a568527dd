//! Tracing setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to whoever runs
//! it. Events go to stderr so they never mix with command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `STOCKROOM_LOG=debug`.
pub const LOG_ENV: &str = "STOCKROOM_LOG";

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
