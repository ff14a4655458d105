//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub type LoggingError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_filter`. Fails instead of
/// panicking when a subscriber is already installed.
pub fn init_logging(default_filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
