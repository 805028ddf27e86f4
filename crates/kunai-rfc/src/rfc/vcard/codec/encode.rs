//! Encoding of decoded values into wire form.
//!
//! RFC 2426 §5 (differences from vCard 2.1): the quoted-printable inline
//! encoding was eliminated in 3.0, and only the "b" encoding is allowed for
//! the `ENCODING` parameter.

use super::transfer::TransferEncoding;
use crate::rfc::vcard::core::param_names::{CHARSET, ENCODING};
use crate::rfc::vcard::core::{CodecContext, ParameterList, ParameterToken};

/// Charset declared for non-ASCII values in vCard 3.x.
const VERSION_3_CHARSET: &str = "utf-8";

/// Parameter string and wire value to store on a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedValue {
    pub parameters: String,
    pub value: String,
}

/// Returns whether a vCard 2.1 value must be quoted-printable encoded.
///
/// True for any non-ASCII character and for any control character, tab and
/// line breaks included. Printable ASCII and spaces pass through as-is.
#[must_use]
pub fn need_encode(value: &str) -> bool {
    !value.is_ascii() || value.chars().any(char::is_control)
}

/// Encodes a value for the context's version and charset.
///
/// vCard 3.x gets charset transcoding only: the text is passed through the
/// charset, so characters it cannot represent are degraded the same way the
/// container would degrade them. Other versions get quoted-printable over
/// the charset's bytes.
#[must_use]
pub fn encode_value(value: &str, ctx: &CodecContext) -> String {
    let charset = ctx.charset();
    let bytes = charset.encode(value);

    if ctx.is_version_3() {
        charset.decode(&bytes).into_owned()
    } else {
        TransferEncoding::QuotedPrintable.encode(&bytes)
    }
}

/// Computes the parameter string and wire value for a decoded value.
///
/// Existing `ENCODING` and `CHARSET` tokens in `parameters` are dropped and
/// recomputed; every other token is kept verbatim and in order.
///
/// Tokens are joined with `;` and the result carries no trailing `;`:
/// `TYPE=HOME` stays `TYPE=HOME`, not `TYPE=HOME;`. An empty string means
/// the property has no parameters.
#[tracing::instrument(skip_all, fields(value_len = value.len(), version = ctx.version()))]
#[must_use]
pub fn encode_for_version(value: &str, parameters: &str, ctx: &CodecContext) -> EncodedValue {
    let mut params = ParameterList::parse(parameters);
    params.remove_managed();

    let value = if ctx.is_version_3() {
        if !value.is_ascii() {
            params.push(ParameterToken::pair(CHARSET, VERSION_3_CHARSET));
        }
        tracing::trace!(declared_charset = !value.is_ascii(), "Encoding as text");
        encode_value(value, ctx)
    } else if need_encode(value) {
        let charset = ctx.charset();
        params.push(ParameterToken::pair(
            ENCODING,
            TransferEncoding::QuotedPrintable.token(false),
        ));
        params.push(ParameterToken::pair(CHARSET, charset.name()));
        tracing::trace!(charset = charset.name(), "Encoding as quoted-printable");
        encode_value(value, ctx)
    } else {
        tracing::trace!("Value needs no encoding");
        value.to_string()
    };

    EncodedValue {
        parameters: params.to_string(),
        value,
    }
}

/// Computes the parameter string and wire value for inline binary data.
///
/// The data is base64 encoded and declared as `ENCODING=b` (vCard 3.x) or
/// `ENCODING=BASE64`. Any `CHARSET` token is dropped since the value is not text.
#[tracing::instrument(skip_all, fields(data_len = data.len(), version = ctx.version()))]
#[must_use]
pub fn encode_binary(data: &[u8], parameters: &str, ctx: &CodecContext) -> EncodedValue {
    let mut params = ParameterList::parse(parameters);
    params.remove_managed();
    params.push(ParameterToken::pair(
        ENCODING,
        TransferEncoding::Base64.token(ctx.is_version_3()),
    ));

    EncodedValue {
        parameters: params.to_string(),
        value: TransferEncoding::Base64.encode(data),
    }
}
