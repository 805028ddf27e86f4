//! Core vCard property types.

mod charset;
mod context;
mod parameter;
mod property;

pub use charset::Charset;
pub use context::CodecContext;
pub use parameter::{ParameterList, ParameterToken, names as param_names};
pub use property::{VCardProperty, names as prop_names};
