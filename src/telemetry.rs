//! Tracing setup for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG`, defaults to `info`. JSON output when `json` is set,
/// for log aggregation in deployed environments. Safe to call more than
/// once; later calls are no-ops.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // Already-initialized is fine (tests call this repeatedly).
    if let Err(e) = result {
        tracing::debug!("tracing subscriber already initialized: {}", e);
    }
}
