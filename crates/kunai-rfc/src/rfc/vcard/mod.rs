//! vCard property value codec (RFC 2425, RFC 2426, vCard 2.1).
//!
//! This module turns application strings into the on-wire value of a single
//! vCard property, declaring whatever `ENCODING` and `CHARSET` parameters the
//! value needs, and turns the wire value back into a string.
//!
//! ## Overview
//!
//! - vCard 3.x has no quoted-printable encoding. Non-ASCII values are declared
//!   with `CHARSET=utf-8` and stored as text.
//! - vCard 2.1 values containing non-ASCII or control characters are
//!   quoted-printable encoded under the container's charset.
//! - Long values are folded at 76 characters when the property is serialized.
//!
//! ## Usage
//!
//! ### Encoding
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::{CodecContext, VCardProperty};
//!
//! let ctx = CodecContext::from_labels("2.1", "utf-8").unwrap();
//! let mut prop = VCardProperty::new("NOTE", "", "");
//! prop.set_decoded_value("Grüße", &ctx);
//!
//! assert_eq!(prop.parameters(), "ENCODING=QUOTED-PRINTABLE;CHARSET=UTF-8");
//! assert_eq!(prop.value(), "Gr=C3=BC=C3=9Fe");
//! ```
//!
//! ### Decoding
//!
//! ```rust
//! use kunai_rfc::rfc::vcard::VCardProperty;
//!
//! let prop = VCardProperty::new("NOTE", "ENCODING=QUOTED-PRINTABLE;CHARSET=utf-8", "Gr=C3=BC=C3=9Fe");
//! assert_eq!(prop.decoded_value().unwrap(), "Grüße");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Property, parameter list, charset and codec context types
//! - [`codec`] - Value encoding and decoding
//! - [`build`] - Line folding
//! - [`parse`] - Unfolding and text value escaping

pub mod build;
pub mod codec;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::fold_value;
pub use codec::{TransferEncoding, decode_bytes, decode_value, encode_value, need_encode};
pub use core::{Charset, CodecContext, ParameterList, VCardProperty};
pub use parse::{escape_text, unescape_text, unfold};
