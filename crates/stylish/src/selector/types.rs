//! Selector type definitions.

use std::fmt;

use crate::format::{Format, FormatKind};
use crate::variable::{Constructed, SymbolTable, Variable};
use crate::Result;

/// A literal selector fragment (e.g. `".parent > .child"`).
///
/// Selectors are opaque text: no combinator semantics are applied beyond what
/// the text itself encodes. Once built a selector is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    text: String,
}

impl Selector {
    /// Create a selector from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The selector text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Render prefixed by `scope` and a single space, or bare if `scope` is empty.
    pub fn render(&self, scope: &str) -> String {
        if scope.is_empty() {
            self.text.clone()
        } else {
            format!("{scope} {}", self.text)
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Selector {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Selector {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A selector, or a variable standing in for one.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorItem {
    /// A literal selector.
    Selector(Selector),
    /// A selector supplied at render time.
    Variable(Variable),
}

impl SelectorItem {
    /// Resolve to a literal selector.
    ///
    /// Variables without a selector transform use their rendered text.
    pub fn resolve(&self, symbols: &SymbolTable) -> Result<Selector> {
        match self {
            SelectorItem::Selector(selector) => Ok(selector.clone()),
            SelectorItem::Variable(variable) => match variable.construct(symbols)? {
                Constructed::Selector(selector) => Ok(selector),
                other => Ok(Selector::new(
                    other.render("", &Format::new(FormatKind::Declarations)),
                )),
            },
        }
    }

    /// Resolve and prefix with `scope`.
    pub fn render(&self, symbols: &SymbolTable, scope: &str) -> Result<String> {
        Ok(self.resolve(symbols)?.render(scope))
    }
}

impl From<Selector> for SelectorItem {
    fn from(selector: Selector) -> Self {
        SelectorItem::Selector(selector)
    }
}

impl From<Variable> for SelectorItem {
    fn from(variable: Variable) -> Self {
        SelectorItem::Variable(variable)
    }
}

impl From<&str> for SelectorItem {
    fn from(text: &str) -> Self {
        SelectorItem::Selector(Selector::new(text))
    }
}

impl From<String> for SelectorItem {
    fn from(text: String) -> Self {
        SelectorItem::Selector(Selector::new(text))
    }
}
