//! Logging initialization using `tracing` and `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, util::SubscriberInitExt};

/// Install the global subscriber, writing to stderr so stdout only carries
/// completion lines. Level defaults to `warn` and follows `RUST_LOG`.
/// Subsequent calls are no-ops.
pub fn init_logging() {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
        .try_init();
}
