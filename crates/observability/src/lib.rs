//! Tracing/logging initialization for storefront tooling and tests.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// JSON output, filter taken from `RUST_LOG` with an `info` default. Safe to
/// call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    init_with_filter(filter);
}

/// Initialize with an explicit filter (tests, embedding applications).
pub fn init_with_filter(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
