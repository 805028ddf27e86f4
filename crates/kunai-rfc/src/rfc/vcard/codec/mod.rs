//! Value encoding and decoding.
//!
//! - [`encode`] chooses and applies the representation for a decoded value
//! - [`decode`] reverses a wire value given its parameter string
//! - [`transfer`] implements the quoted-printable and base64 framings

mod decode;
mod encode;
mod transfer;

pub use decode::{decode_bytes, decode_value};
pub use encode::{EncodedValue, encode_binary, encode_for_version, encode_value, need_encode};
pub use transfer::TransferEncoding;
