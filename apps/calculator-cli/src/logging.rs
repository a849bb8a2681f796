//! Logging initialization.

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level.
///
/// # Errors
/// Returns an error if the configured level is not a valid filter directive.
pub fn build_filter(cfg: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| parse_level(&cfg.level))
}

/// Parse a configured level such as `warn` or `calculator=debug,warn`.
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn parse_level(level: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid logging level '{level}'"))
}

/// Install the global subscriber. Events go to stderr so stdout carries only results.
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(cfg)?)
        .with_writer(std::io::stderr)
        .with_target(false);

    match cfg.format {
        LogFormat::Text => builder.try_init(),
        // Machine-readable lines carry no color escapes.
        LogFormat::Json => builder.with_ansi(false).json().try_init(),
    }
    .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
