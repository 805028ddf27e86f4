//! Settings an owning vCard container supplies to its properties.

use kunai_core::config::CodecConfig;

use super::charset::Charset;
use crate::error::RfcResult;

/// The container's format version and charset.
///
/// Passed to every property call that encodes, instead of the property
/// holding a reference back to its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecContext {
    version: String,
    charset: Charset,
}

impl CodecContext {
    /// Creates a context. The charset is normalized to the charset encoded
    /// output is actually produced in.
    #[must_use]
    pub fn new(version: impl Into<String>, charset: Charset) -> Self {
        Self {
            version: version.into(),
            charset: charset.output(),
        }
    }

    /// Creates a context from a version and a charset label.
    ///
    /// ## Errors
    /// Returns `RfcError::UnknownCharset` if the label cannot be resolved.
    pub fn from_labels(version: impl Into<String>, charset: &str) -> RfcResult<Self> {
        Ok(Self::new(version, Charset::for_label(charset)?))
    }

    /// Creates a context from loaded configuration.
    ///
    /// ## Errors
    /// Returns an error if the configuration is invalid or names an unknown charset.
    pub fn from_config(config: &CodecConfig) -> RfcResult<Self> {
        config.validate()?;
        Self::from_labels(config.version.clone(), &config.charset)
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn charset(&self) -> Charset {
        self.charset
    }

    /// vCard 3.x forbids quoted-printable; only the first character is inspected.
    #[must_use]
    pub fn is_version_3(&self) -> bool {
        self.version.starts_with('3')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RfcError;

    #[test]
    fn version_prefix() {
        assert!(CodecContext::new("3.0", Charset::utf8()).is_version_3());
        assert!(CodecContext::new("3", Charset::utf8()).is_version_3());
        assert!(!CodecContext::new("2.1", Charset::utf8()).is_version_3());
        assert!(!CodecContext::new("4.0", Charset::utf8()).is_version_3());
        assert!(!CodecContext::new("", Charset::utf8()).is_version_3());
    }

    #[test]
    fn from_labels_unknown_charset() {
        let err = CodecContext::from_labels("2.1", "no-such-charset").unwrap_err();
        assert!(matches!(err, RfcError::UnknownCharset(_)));
    }

    #[test]
    fn from_config_defaults() {
        let ctx = CodecContext::from_config(&CodecConfig::default()).unwrap();
        assert_eq!(ctx.version(), "3.0");
        assert_eq!(ctx.charset(), Charset::utf8());
    }

    #[test]
    fn from_config_invalid() {
        let config = CodecConfig {
            version: String::new(),
            ..CodecConfig::default()
        };

        let err = CodecContext::from_config(&config).unwrap_err();
        assert!(matches!(err, RfcError::CoreError(_)));
    }

    #[test]
    fn utf16_context_encodes_as_utf8() {
        let ctx = CodecContext::from_labels("2.1", "utf-16").unwrap();
        assert_eq!(ctx.charset(), Charset::utf8());
    }
}
