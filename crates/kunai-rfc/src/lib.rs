//! vCard property value codec (RFC 2425 / RFC 2426, vCard 2.1).
//!
//! See [`rfc::vcard`] for the entry points.

pub mod error;
pub mod rfc;

pub use error::{RfcError, RfcResult};
