//! Variable resolution.
//!
//! A [`Variable`] lets a tree be built before some of its values are known.
//! It holds a reference (a symbol, or a structure whose leaves may be
//! symbols) and an optional [`Transform`] applied once the reference has been
//! resolved against a [`SymbolTable`].
//!
//! # Example
//!
//! ```
//! use stylish::types::{Symbol, Value};
//! use stylish::variable::{SymbolTable, Transform, Variable};
//!
//! let accent = Variable::symbol("accent");
//! let table = SymbolTable::new().with("accent", "bold");
//! assert_eq!(accent.render(&table, "").unwrap(), "bold");
//! assert!(accent.render(&SymbolTable::new(), "").is_err());
//!
//! let bright = Variable::with_transform(Symbol::new("bright"), Transform::Color);
//! let table = SymbolTable::new().with("bright", "f00");
//! assert_eq!(bright.render(&table, "").unwrap(), "#f00");
//! ```

use std::fmt;

use crate::declaration::Background;
use crate::format::{Format, FormatKind};
use crate::logging::targets;
use crate::selector::Selector;
use crate::types::{Color, Symbol, Value};
use crate::variable::SymbolTable;
use crate::{Error, Result};

/// What a resolved variable value is turned into before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Build a [`Selector`] from the resolved text.
    Selector,
    /// Validate and normalize the resolved text as a [`Color`].
    Color,
    /// Build a [`Background`] group from a resolved mapping.
    Background,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Selector => write!(f, "selector"),
            Transform::Color => write!(f, "color"),
            Transform::Background => write!(f, "background"),
        }
    }
}

/// The result of resolving a variable and applying its transform.
#[derive(Debug, Clone, PartialEq)]
pub enum Constructed {
    /// No transform: the resolved value itself.
    Value(Value),
    /// A selector.
    Selector(Selector),
    /// A color.
    Color(Color),
    /// A background declaration group.
    Background(Background),
}

impl Constructed {
    /// Render the constructed entity.
    ///
    /// `scope` prefixes selectors; `separator` joins the declarations of an
    /// expanded background.
    pub fn render(&self, scope: &str, separator: &Format) -> String {
        match self {
            Constructed::Value(value) => value.to_string(),
            Constructed::Selector(selector) => selector.render(scope),
            Constructed::Color(color) => color.to_string(),
            Constructed::Background(background) => background.render(separator),
        }
    }
}

/// A placeholder resolved against a symbol table at render time.
///
/// Resolution is pure: the same variable can be rendered against different
/// tables on different calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    reference: Value,
    transform: Option<Transform>,
}

impl Variable {
    /// Create a variable without a transform.
    pub fn new(reference: impl Into<Value>) -> Self {
        Self {
            reference: reference.into(),
            transform: None,
        }
    }

    /// Create a variable referencing a single symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(Symbol::new(name))
    }

    /// Create a variable whose resolved value is passed through `transform`.
    pub fn with_transform(reference: impl Into<Value>, transform: Transform) -> Self {
        Self {
            reference: reference.into(),
            transform: Some(transform),
        }
    }

    /// Create a variable standing in for a selector.
    pub fn selector(name: impl Into<String>) -> Self {
        Self::with_transform(Symbol::new(name), Transform::Selector)
    }

    /// The unresolved reference.
    pub fn reference(&self) -> &Value {
        &self.reference
    }

    /// The transform, if any.
    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// Resolve the reference against `symbols`.
    ///
    /// Symbols are looked up; sequences and mappings are resolved element by
    /// element (mappings in insertion order, keys kept); literals are
    /// returned unchanged.
    pub fn resolve(&self, symbols: &SymbolTable) -> Result<Value> {
        resolve_value(&self.reference, symbols)
    }

    /// Resolve and apply the transform.
    pub fn construct(&self, symbols: &SymbolTable) -> Result<Constructed> {
        let value = self.resolve(symbols)?;

        match self.transform {
            None => Ok(Constructed::Value(value)),
            Some(Transform::Selector) => Ok(Constructed::Selector(Selector::new(value.to_string()))),
            Some(Transform::Color) => {
                let text = value.to_string();
                Color::parse(&text)
                    .map(Constructed::Color)
                    .ok_or_else(|| Error::invalid_value("color", format!("'{text}' is not a color")))
            }
            Some(Transform::Background) => Background::from_value(&value).map(Constructed::Background),
        }
    }

    /// Resolve, transform and render.
    ///
    /// Backgrounds rendered this way use the default declarations separator.
    pub fn render(&self, symbols: &SymbolTable, scope: &str) -> Result<String> {
        let separator = Format::new(FormatKind::Declarations);
        Ok(self.construct(symbols)?.render(scope, &separator))
    }
}

impl From<Symbol> for Variable {
    fn from(symbol: Symbol) -> Self {
        Self::new(symbol)
    }
}

fn resolve_value(value: &Value, symbols: &SymbolTable) -> Result<Value> {
    match value {
        Value::Symbol(symbol) => {
            tracing::trace!(target: targets::VARIABLE, symbol = %symbol, "resolving symbol");
            symbols
                .get(symbol.name())
                .cloned()
                .ok_or_else(|| Error::undefined_variable(symbol.name()))
        }
        Value::Sequence(items) => items
            .iter()
            .map(|item| resolve_value(item, symbols))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Value::Mapping(entries) => entries
            .iter()
            .map(|(key, item)| Ok((key.clone(), resolve_value(item, symbols)?)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Mapping),
        literal => Ok(literal.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SymbolTable {
        SymbolTable::new()
            .with("accent", "bold")
            .with("button", "button.png")
            .with("bright", "0f0")
    }

    #[test]
    fn symbol_lookup() {
        let var = Variable::symbol("accent");
        assert_eq!(var.resolve(&table()).unwrap(), Value::from("bold"));
    }

    #[test]
    fn undefined_symbol_fails() {
        let var = Variable::symbol("missing");
        let err = var.resolve(&table()).unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { ref name } if name == "missing"));
        assert_eq!(err.to_string(), ":missing could not be located in the symbol table");
    }

    #[test]
    fn literal_reference_is_unchanged() {
        let var = Variable::new(1.5);
        assert_eq!(var.resolve(&SymbolTable::new()).unwrap(), Value::from(1.5));
    }

    #[test]
    fn nested_structures_keep_shape() {
        let var = Variable::new(Value::mapping([
            ("image", Value::from(Symbol::new("button"))),
            (
                "position",
                Value::sequence([Value::from("left"), Value::from(Symbol::new("accent"))]),
            ),
        ]));

        let resolved = var.resolve(&table()).unwrap();
        assert_eq!(
            resolved,
            Value::mapping([
                ("image", Value::from("button.png")),
                ("position", Value::sequence(["left", "bold"])),
            ])
        );
    }

    #[test]
    fn nested_failure_names_first_missing_symbol() {
        let var = Variable::new(Value::sequence([
            Value::from(Symbol::new("accent")),
            Value::from(Symbol::new("first")),
            Value::from(Symbol::new("second")),
        ]));
        let err = var.resolve(&table()).unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { ref name } if name == "first"));
    }

    #[test]
    fn same_variable_different_tables() {
        let var = Variable::symbol("accent");
        let light = SymbolTable::new().with("accent", "normal");
        assert_eq!(var.render(&table(), "").unwrap(), "bold");
        assert_eq!(var.render(&light, "").unwrap(), "normal");
    }

    #[test]
    fn color_transform() {
        let var = Variable::with_transform(Symbol::new("bright"), Transform::Color);
        assert_eq!(var.render(&table(), "").unwrap(), "#0f0");

        let bad = Variable::with_transform(Symbol::new("accent"), Transform::Color);
        assert!(matches!(bad.render(&table(), ""), Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn selector_transform_uses_scope() {
        let var = Variable::selector("sel");
        let symbols = SymbolTable::new().with("sel", "body p");
        assert_eq!(var.render(&symbols, "").unwrap(), "body p");
        assert_eq!(var.render(&symbols, ".main").unwrap(), ".main body p");
    }

    #[test]
    fn background_transform() {
        let var = Variable::with_transform(
            Value::mapping([
                ("image", Value::from(Symbol::new("button"))),
                ("color", Value::from(Symbol::new("bright"))),
            ]),
            Transform::Background,
        );
        assert_eq!(
            var.render(&table(), "").unwrap(),
            "background-color:#0f0; background-image:url('button.png');"
        );

        let not_a_mapping = Variable::with_transform(Symbol::new("accent"), Transform::Background);
        assert!(matches!(
            not_a_mapping.render(&table(), ""),
            Err(Error::InvalidValue { .. })
        ));
    }
}
