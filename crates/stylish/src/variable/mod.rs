//! Deferred values bound at render time.

mod resolve;
mod table;

pub use resolve::{Constructed, Transform, Variable};
pub use table::SymbolTable;
