//! Tracing initialization for embedding applications and tests.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! the embedder's job. This helper wires up the common case: an `EnvFilter`
//! driven by `EDGEWATCH_LOG` (falling back to `RUST_LOG`), formatted to
//! stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "EDGEWATCH_LOG";

/// Install a stderr subscriber with an environment-driven filter.
///
/// Safe to call more than once; later calls are no-ops if a global
/// subscriber is already set (tests in one binary share the first one).
pub fn init() {
    let filter = std::env::var(LOG_ENV_VAR)
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::from_default_env());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
