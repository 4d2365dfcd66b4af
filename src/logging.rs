// src/logging.rs
//
// Diagnostics go to stderr so stdout stays clean for `read-version`.
// Level priority: RUST_LOG > --debug > DEFAULT_LOG_LEVEL.

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn build_filter(debug_flag: bool) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(debug_flag: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug_flag))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
}
