//! Builder DSL for Stylish stylesheet trees.
//!
//! [`generate`] runs a block against a [`Description`] bound to a fresh root
//! node; the description's methods append rules, comments and nested scopes.
//! Declarations are given as key/value pairs and pass through a
//! [`DeclarationParser`], which rewrites key names and routes special shapes
//! (background mappings, colors) to dedicated declaration types.
//!
//! # Example
//!
//! ```
//! use stylish::variable::SymbolTable;
//! use stylish_generate::generate;
//!
//! let sheet = generate(|s| {
//!     s.element("body", [("margin", "1em")])?;
//!     s.scope(".error", |s| {
//!         s.element("p", [("color", "#f00")])?;
//!         s.element("em", [("font_weight", "bold")])?;
//!         Ok(())
//!     })?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     sheet.render(&SymbolTable::new(), "").unwrap(),
//!     "body {margin:1em;}\n.error p {color:#f00;}\n.error em {font-weight:bold;}"
//! );
//! ```

mod description;
pub mod elements;
pub mod parse;

pub use description::{Description, IntoSelectors};
pub use parse::{
    parse_declarations, BackgroundExtension, ColorExtension, DeclarationExtension,
    DeclarationParser,
};

use stylish::tree::Node;
use stylish::Result;

/// Build a stylesheet with the default declaration parser.
pub fn generate<F>(build: F) -> Result<Node>
where
    F: FnOnce(&mut Description<'_>) -> Result<()>,
{
    generate_with(&DeclarationParser::default(), build)
}

/// Build a stylesheet with a custom declaration parser.
pub fn generate_with<F>(parser: &DeclarationParser, build: F) -> Result<Node>
where
    F: FnOnce(&mut Description<'_>) -> Result<()>,
{
    let mut root = Node::root();
    build(&mut Description::new(&mut root, parser))?;
    Ok(root)
}
