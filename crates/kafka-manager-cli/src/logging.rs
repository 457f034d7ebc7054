//! Console logging for the CLI.
//!
//! Events go to stderr so stdout carries only JSON output. `RUST_LOG`
//! overrides the default `warn` level.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_LEVEL: &str = "warn";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
