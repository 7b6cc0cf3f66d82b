//! Logging setup for the observatory binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// An unset or empty `RUST_LOG` means `info`. Output goes to stderr so the
/// `chart` and `resolve` commands keep stdout clean for piping.
pub fn init_logging() {
    let filter = match std::env::var("RUST_LOG") {
        Ok(rustlog) if !rustlog.is_empty() => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        }
        _ => EnvFilter::new("info"),
    };

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
