//! Named character encodings for `CHARSET=` parameters.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::error::{RfcError, RfcResult};

/// A named character encoding.
///
/// Wraps an `encoding_rs` encoding resolved from a WHATWG label, so
/// `utf-8`, `UTF8`, `latin1` and `windows-1252` all resolve as browsers and
/// mail clients would resolve them.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Charset(&'static Encoding);

impl Charset {
    /// UTF-8, the charset vCard 3.0 declares for non-ASCII text.
    #[must_use]
    pub fn utf8() -> Self {
        Self(encoding_rs::UTF_8)
    }

    /// Resolves a charset label (case-insensitive, surrounding whitespace ignored).
    ///
    /// ## Errors
    /// Returns `RfcError::UnknownCharset` if the label names no known encoding.
    pub fn for_label(label: &str) -> RfcResult<Self> {
        Encoding::for_label_no_replacement(label.trim().as_bytes())
            .map(Self)
            .ok_or_else(|| RfcError::UnknownCharset(label.to_string()))
    }

    /// Canonical name, written verbatim into `CHARSET=` parameters.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// The charset text is actually written in when encoding.
    ///
    /// Identical to `self` except for the UTF-16 family, which `encoding_rs`
    /// encodes as UTF-8.
    #[must_use]
    pub fn output(self) -> Self {
        Self(self.0.output_encoding())
    }

    /// Transcodes `text` to bytes in this charset.
    ///
    /// Characters the charset cannot represent become HTML numeric character
    /// references, so the conversion never fails but may lose fidelity.
    #[must_use]
    pub fn encode(self, text: &str) -> Cow<'_, [u8]> {
        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            tracing::debug!(charset = self.name(), "Value not fully representable in charset");
        }
        bytes
    }

    /// Interprets `bytes` in this charset. Malformed sequences become U+FFFD.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Cow<'_, str> {
        self.0.decode_without_bom_handling(bytes).0
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Charset").field(&self.name()).finish()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
