//! Decoding of wire values into application strings.

use super::transfer::TransferEncoding;
use crate::error::RfcResult;
use crate::rfc::vcard::core::param_names::{CHARSET, ENCODING};
use crate::rfc::vcard::core::{Charset, ParameterList};

/// Reverses the transfer encoding declared in `parameters`, if any.
///
/// ## Errors
/// Returns `RfcError::UnsupportedEncodingKind` for an `ENCODING` other than
/// quoted-printable or base64, or a decode error for malformed input.
pub fn decode_bytes(value: &str, parameters: &str) -> RfcResult<Vec<u8>> {
    let params = ParameterList::parse(parameters);
    match params.get(ENCODING) {
        Some(token) => TransferEncoding::from_token(token)?.decode(value.as_bytes()),
        None => Ok(value.as_bytes().to_vec()),
    }
}

/// Decodes a wire value using the `ENCODING` and `CHARSET` tokens in `parameters`.
///
/// Without a `CHARSET` the bytes are read as UTF-8. Text escapes such as `\n`
/// are left as they are; see [`unescape_text`](crate::rfc::vcard::unescape_text).
///
/// ## Errors
/// Returns `RfcError::UnsupportedEncodingKind` for an unknown `ENCODING`,
/// `RfcError::UnknownCharset` for an unresolvable `CHARSET`, or a decode error
/// for malformed transfer-encoded input. No partial value is returned.
#[tracing::instrument(skip_all, fields(value_len = value.len()))]
pub fn decode_value(value: &str, parameters: &str) -> RfcResult<String> {
    let params = ParameterList::parse(parameters);

    let encoding = params.get(ENCODING).map(TransferEncoding::from_token).transpose()?;
    let charset = params.get(CHARSET).map(Charset::for_label).transpose()?;
    tracing::trace!(?encoding, ?charset, "Decoding value");

    let bytes = match encoding {
        Some(encoding) => encoding.decode(value.as_bytes())?,
        None if charset.is_none() => return Ok(value.to_string()),
        None => value.as_bytes().to_vec(),
    };

    let text = match charset {
        Some(charset) => charset.decode(&bytes).into_owned(),
        None => String::from_utf8_lossy(&bytes).into_owned(),
    };

    Ok(text)
}
