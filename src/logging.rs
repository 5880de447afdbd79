//! Subscriber setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Installs an fmt subscriber on stderr, filtered by `RUST_LOG` (default
/// `info`). Stdout is left to the protocol or document output.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
