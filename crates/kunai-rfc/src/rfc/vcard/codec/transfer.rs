//! Transfer encodings allowed in the `ENCODING` parameter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quoted_printable::{InputMode, Options};

use crate::error::{RfcError, RfcResult};

/// A transfer encoding named by an `ENCODING=` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    /// `QUOTED-PRINTABLE` (vCard 2.1 only).
    QuotedPrintable,
    /// `BASE64` in vCard 2.1, `b` in vCard 3.0.
    Base64,
}

impl TransferEncoding {
    /// Parses an `ENCODING=` value (case-insensitive).
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedEncodingKind` with the lower-cased token for
    /// anything other than `quoted-printable`, `b` or `base64`.
    pub fn from_token(token: &str) -> RfcResult<Self> {
        let token = token.to_ascii_lowercase();
        match token.as_str() {
            "quoted-printable" => Ok(Self::QuotedPrintable),
            "b" | "base64" => Ok(Self::Base64),
            _ => Err(RfcError::UnsupportedEncodingKind(token)),
        }
    }

    /// The parameter value written for this encoding under the given version.
    #[must_use]
    pub const fn token(self, version_3: bool) -> &'static str {
        match self {
            Self::QuotedPrintable => "QUOTED-PRINTABLE",
            Self::Base64 if version_3 => "b",
            Self::Base64 => "BASE64",
        }
    }

    /// Encodes raw bytes into wire text.
    ///
    /// Quoted-printable output treats the input as binary (CR and LF are
    /// escaped) and is a single line with no soft line breaks. Line width is
    /// left to folding; a soft break followed by a space would read back as
    /// a fold.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::QuotedPrintable => quoted_printable::encode_with_options(
                bytes,
                Options::default()
                    .input_mode(InputMode::Binary)
                    .line_length_limit(usize::MAX),
            ),
            Self::Base64 => STANDARD.encode(bytes),
        }
    }

    /// Decodes wire text back into raw bytes.
    ///
    /// Base64 input may be wrapped over several lines; ASCII whitespace is ignored.
    ///
    /// ## Errors
    /// Returns an error if the input is not valid for this encoding.
    pub fn decode(self, wire: &[u8]) -> RfcResult<Vec<u8>> {
        match self {
            Self::QuotedPrintable => Ok(quoted_printable::decode(
                wire,
                quoted_printable::ParseMode::Robust,
            )?),
            Self::Base64 => {
                let compact: Vec<u8> = wire
                    .iter()
                    .copied()
                    .filter(|b| !b.is_ascii_whitespace())
                    .collect();
                Ok(STANDARD.decode(compact)?)
            }
        }
    }
}
