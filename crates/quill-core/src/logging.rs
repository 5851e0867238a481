//! Logging setup based on `tracing-subscriber`.
//!
//! Library crates only emit `tracing` events. Binaries and tests call one of
//! these functions to see them.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber, reading directives from `RUST_LOG`.
///
/// Calling this more than once is harmless; only the first call installs.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a formatting subscriber with explicit filter directives,
/// e.g. `"quill_turtle=debug"`.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    // A global subscriber may already be set (tests, host applications).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
