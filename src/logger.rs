//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once, after settings are merged so `--debug` is known.

use tracing_subscriber::EnvFilter;

use hex_tessellator::error::AppError;

/// Default filter: warnings only, or everything from this crate at `debug`.
pub fn default_level(debug: bool) -> &'static str {
    if debug { "hex_tessellator=debug" } else { "warn" }
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; `level` is the fallback when it is unset or invalid.
pub fn init(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}
