//! vCard serialization helpers.

mod fold;

pub use fold::{FOLD_MARKER, MAX_LINE_CHARS, fold_value};
