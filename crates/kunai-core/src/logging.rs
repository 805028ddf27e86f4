use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `logging.level`.
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
///
/// ## Errors
/// Returns an error if the level is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}
