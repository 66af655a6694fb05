//! Programmatic CSS stylesheet generation.
//!
//! This crate builds stylesheets as a tree of selector scopes and leaves,
//! then renders the tree to CSS text:
//!
//! - **Tree**: a root [`Node`](tree::Node), nested scoped nodes, and
//!   [`Rule`](rules::Rule) / [`Comment`](rules::Comment) leaves
//! - **Variables**: placeholders bound from a [`SymbolTable`](variable::SymbolTable)
//!   only when rendering
//! - **Format contracts**: validated templates controlling whitespace and
//!   punctuation without ever producing invalid syntax
//! - **Declaration groups**: a validated [`Background`](declaration::Background)
//!   shorthand with expanded and compressed output
//!
//! # Example
//!
//! ```
//! use stylish::prelude::*;
//!
//! let mut header = Node::scoped(".header");
//! header.append(Rule::new(
//!     ["h1"],
//!     [Declaration::new("font-weight", Value::from(Symbol::new("weight")))],
//! ));
//!
//! let mut sheet = Node::root();
//! sheet.append(Comment::new("Header styles")).append(header);
//!
//! let symbols = SymbolTable::new().with("weight", "bold");
//! assert_eq!(
//!     sheet.render(&symbols, "").unwrap(),
//!     "/**\n * Header styles\n */\n.header h1 {font-weight:bold;}"
//! );
//! ```
//!
//! Rendering never mutates the tree, so one tree can be rendered any number
//! of times, with different symbol tables, from several threads at once.

pub mod declaration;
pub mod format;
pub mod logging;
pub mod rules;
pub mod selector;
pub mod tree;
pub mod types;
pub mod variable;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::declaration::{Background, Declaration, DeclarationEntry, Declarations, Renderable};
    pub use crate::format::{Format, FormatKind, Formattable};
    pub use crate::rules::{Comment, Rule};
    pub use crate::selector::{Selector, SelectorItem, Selectors};
    pub use crate::tree::{Child, Leaf, Node};
    pub use crate::types::{Color, Symbol, Value};
    pub use crate::variable::{Constructed, SymbolTable, Transform, Variable};
    pub use crate::{Error, Result};
}
