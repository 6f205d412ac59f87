//! Logging initialization
//!
//! Uses tracing with an environment-driven filter so the engine itself stays
//! free of any output concerns.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber.
///
/// The log level is taken from `RUST_LOG` (default: `info`), e.g.
/// `RUST_LOG=freight_recalc=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize logging for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
