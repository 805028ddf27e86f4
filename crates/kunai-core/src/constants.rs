/// vCard format versions understood by the codec
pub const VCARD_VERSION_21: &str = "2.1";
pub const VCARD_VERSION_30: &str = "3.0";

/// Charset label used when nothing else is configured
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Name of the optional TOML configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prefix for environment variable overrides, e.g. `KUNAI_CODEC__VERSION`
pub const ENV_PREFIX: &str = "KUNAI";
