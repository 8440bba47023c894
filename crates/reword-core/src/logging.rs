//! Tracing subscriber setup shared by binaries and tests.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// Filter comes from `RUST_LOG` when set, otherwise `default_filter`
/// (e.g. `"info,reword_engine=debug"`). `json` switches the output format
/// for log shippers. Calling this twice is a no-op: the second install
/// attempt is ignored rather than panicking, which keeps test binaries
/// that share a process safe.
pub fn init_tracing(default_filter: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = if json {
        fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .try_init()
    } else {
        fmt().with_env_filter(filter).try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
