//! Process-wide log output for the CLI.
//!
//! Library crates emit through the `log` facade; the subscriber installed
//! here bridges those records into `tracing` and writes them to stderr so
//! reports on stdout stay clean.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the stderr subscriber, honouring `RUST_LOG` when set.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    #[expect(
        clippy::let_underscore_must_use,
        reason = "a subscriber installed earlier is fine to keep"
    )]
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
