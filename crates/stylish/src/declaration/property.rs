//! Single `property:value;` declarations.

use crate::format::{Format, FormatKind, Formattable};
use crate::types::{Color, Value};
use crate::variable::{Constructed, SymbolTable, Variable};
use crate::{Error, Result};

/// A declaration value: a literal, or a variable bound at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// A value known at build time.
    Value(Value),
    /// A value resolved from the symbol table.
    Variable(Variable),
}

impl Renderable {
    /// Render the value text.
    pub fn render(&self, symbols: &SymbolTable) -> Result<String> {
        match self {
            Renderable::Value(value) => Ok(value.to_string()),
            Renderable::Variable(variable) => match variable.construct(symbols)? {
                Constructed::Background(_) => Err(Error::invalid_value(
                    variable.reference().to_string(),
                    "a declaration group cannot be used as a value",
                )),
                other => Ok(other.render("", &Format::new(FormatKind::Declarations))),
            },
        }
    }

    /// Whether rendering needs a symbol table.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Renderable::Variable(_))
    }
}

/// Values containing symbols are wrapped in a [`Variable`].
impl From<Value> for Renderable {
    fn from(value: Value) -> Self {
        if value.includes_symbols() {
            Renderable::Variable(Variable::new(value))
        } else {
            Renderable::Value(value)
        }
    }
}

impl From<Variable> for Renderable {
    fn from(variable: Variable) -> Self {
        Renderable::Variable(variable)
    }
}

impl From<Color> for Renderable {
    fn from(color: Color) -> Self {
        Renderable::Value(Value::Str(color.to_string()))
    }
}

impl From<&str> for Renderable {
    fn from(text: &str) -> Self {
        Renderable::Value(Value::from(text))
    }
}

impl From<String> for Renderable {
    fn from(text: String) -> Self {
        Renderable::Value(Value::from(text))
    }
}

impl From<f64> for Renderable {
    fn from(n: f64) -> Self {
        Renderable::Value(Value::from(n))
    }
}

impl From<i32> for Renderable {
    fn from(n: i32) -> Self {
        Renderable::Value(Value::from(n))
    }
}

/// A single styling statement, rendered as `property:value;` by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    property: String,
    value: Renderable,
    format: Format,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<Renderable>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            format: Format::new(FormatKind::Declaration),
        }
    }

    /// The property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Set the property name.
    pub fn set_property(&mut self, property: impl Into<String>) {
        self.property = property.into();
    }

    /// The value.
    pub fn value(&self) -> &Renderable {
        &self.value
    }

    /// Set the value.
    pub fn set_value(&mut self, value: impl Into<Renderable>) {
        self.value = value.into();
    }

    /// Render through the declaration format.
    pub fn render(&self, symbols: &SymbolTable) -> Result<String> {
        let value = self.value.render(symbols)?;
        Ok(self.format.fill(&[self.property.as_str(), value.as_str()]))
    }
}

impl Formattable for Declaration {
    fn format(&self) -> &Format {
        &self.format
    }

    fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }
}
