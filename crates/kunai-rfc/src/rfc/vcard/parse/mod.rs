//! Reading wire values back.
//!
//! - [`unfold`] removes fold continuations
//! - [`unescape_text`] / [`escape_text`] handle RFC 2426 text value escapes

mod lexer;
mod values;

pub use lexer::unfold;
pub use values::{escape_text, unescape_text};
