use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_CHARSET, ENV_PREFIX, VCARD_VERSION_30};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

/// Values an owning vCard container hands to each property it encodes.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Format version, e.g. "2.1" or "3.0". Only the leading character matters.
    pub version: String,
    /// Charset label, resolved by the codec (e.g. "utf-8", "windows-1252").
    pub charset: String,
    /// Whether serialized values are folded at 76 characters.
    pub fold_long_lines: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            version: VCARD_VERSION_30.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            fold_long_lines: true,
        }
    }
}

impl CodecConfig {
    /// ## Summary
    /// Checks that the version and charset label are present.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if either is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.version.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "codec.version must not be empty".to_string(),
            ));
        }
        if self.charset.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "codec.charset must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `config.toml` and
    /// `KUNAI_`-prefixed environment variables. Later sources take precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if the resulting codec settings are invalid.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("codec.version", VCARD_VERSION_30)?
            .set_default("codec.charset", DEFAULT_CHARSET)?
            .set_default("codec.fold_long_lines", true)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.codec.validate()?;
        tracing::debug!(
            version = %settings.codec.version,
            charset = %settings.codec.charset,
            fold_long_lines = settings.codec.fold_long_lines,
            "Codec configuration loaded"
        );

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and `config.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
