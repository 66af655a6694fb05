//! Value types shared by declarations, variables and symbol tables.

mod color;
mod value;

pub use color::Color;
pub use value::{Symbol, Value};
