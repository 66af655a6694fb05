//! Selectors and selector lists.

mod list;
mod types;

pub use list::Selectors;
pub use types::{Selector, SelectorItem};
