//! vCard property type.

use std::fmt;

use kunai_core::config::CodecConfig;

use super::context::CodecContext;
use crate::error::RfcResult;
use crate::rfc::vcard::build::fold_value;
use crate::rfc::vcard::codec::{
    EncodedValue, decode_bytes, decode_value, encode_binary, encode_for_version,
};

/// A single `NAME;PARAMETERS:value` vCard property.
///
/// The value is stored in wire form: encoded, escaped and unfolded. Folding
/// is applied only when the property is serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    name: String,
    parameters: String,
    value: String,
    fold_long_lines: bool,
}

impl VCardProperty {
    /// Creates a property from its name, raw parameter string and wire value.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        parameters: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
            value: value.into(),
            fold_long_lines: true,
        }
    }

    /// Creates an empty property with folding taken from configuration.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: &CodecConfig) -> Self {
        let mut prop = Self::new(name, "", "");
        prop.fold_long_lines = config.fold_long_lines;
        prop
    }

    /// Property name, case preserved.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw parameter string, e.g. `ENCODING=QUOTED-PRINTABLE;CHARSET=utf-8`.
    #[must_use]
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Replaces the raw parameter string.
    ///
    /// The caller is responsible for keeping `ENCODING` and `CHARSET`
    /// consistent with the value; [`set_decoded_value`](Self::set_decoded_value)
    /// does this automatically.
    pub fn set_parameters(&mut self, parameters: impl Into<String>) {
        self.parameters = parameters.into();
    }

    /// Encoded wire value, unfolded.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the wire value.
    ///
    /// NOTE: the value must already be encoded, and the matching `ENCODING`
    /// and `CHARSET` tokens set in the parameters. Normally use
    /// [`set_decoded_value`](Self::set_decoded_value) instead.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn fold_long_lines(&self) -> bool {
        self.fold_long_lines
    }

    pub fn set_fold_long_lines(&mut self, fold: bool) {
        self.fold_long_lines = fold;
    }

    /// Encodes `value` for the container's version and charset and stores it.
    ///
    /// `ENCODING` and `CHARSET` parameters are recomputed; other parameters
    /// are kept in order.
    ///
    /// The value is not text-escaped. Under vCard 3.0 a line break in `value`
    /// is stored as is and ends the physical line when serialized; for
    /// free-text properties such as `NOTE` pass the value through
    /// [`escape_text`](crate::rfc::vcard::escape_text) first.
    pub fn set_decoded_value(&mut self, value: &str, ctx: &CodecContext) {
        let encoded = encode_for_version(value, &self.parameters, ctx);
        self.store(encoded);
    }

    /// Stores inline binary data (e.g. a `PHOTO`) base64 encoded.
    pub fn set_binary_value(&mut self, data: &[u8], ctx: &CodecContext) {
        let encoded = encode_binary(data, &self.parameters, ctx);
        self.store(encoded);
    }

    /// Decodes the stored value according to its `ENCODING` and `CHARSET` parameters.
    ///
    /// Text escapes such as `\n` are not unescaped.
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedEncodingKind` or `RfcError::UnknownCharset`
    /// if the parameters name something the codec cannot decode, or a decode
    /// error if the value is malformed.
    pub fn decoded_value(&self) -> RfcResult<String> {
        decode_value(&self.value, &self.parameters)
    }

    /// Returns the stored value with only the transfer encoding reversed.
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedEncodingKind` for an unknown `ENCODING`, or a
    /// decode error if the value is malformed.
    pub fn decoded_bytes(&self) -> RfcResult<Vec<u8>> {
        decode_bytes(&self.value, &self.parameters)
    }

    /// Serializes the property as `NAME;PARAMETERS:value` (or `NAME:value`),
    /// folding the value if enabled.
    #[must_use]
    pub fn to_item_string(&self) -> String {
        self.to_string()
    }

    fn store(&mut self, encoded: EncodedValue) {
        self.parameters = encoded.parameters;
        self.value = encoded.value;
    }
}

impl fmt::Display for VCardProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.parameters.is_empty() {
            write!(f, ";{}", self.parameters)?;
        }
        f.write_str(":")?;

        if self.fold_long_lines {
            f.write_str(&fold_value(&self.value))
        } else {
            f.write_str(&self.value)
        }
    }
}

/// Common property names as constants.
pub mod names {
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const ADR: &str = "ADR";
    pub const LABEL: &str = "LABEL";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const NOTE: &str = "NOTE";
    pub const PHOTO: &str = "PHOTO";
    pub const LOGO: &str = "LOGO";
    pub const KEY: &str = "KEY";
    pub const SOUND: &str = "SOUND";
    pub const VERSION: &str = "VERSION";
}
