//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Verbosity comes from `RUST_LOG` (errors only when unset). Events go to
/// stderr; stdout is reserved for the size report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
