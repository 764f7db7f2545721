//! Tracing initialisation for the command line tool
//!
//! Diagnostics go to stderr so they never mix with annotated output on
//! stdout. Filtering follows the RUST_LOG env var:
//! - `RUST_LOG=debug` - per-pass summaries
//! - `RUST_LOG=synmark::syntax=trace` - individual rejected matches
//!
//! Without RUST_LOG only warnings are shown.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
