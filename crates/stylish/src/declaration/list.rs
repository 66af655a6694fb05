//! Declaration lists joined by the declarations format.

use crate::declaration::{Background, Declaration};
use crate::format::{Format, FormatKind, Formattable};
use crate::variable::{Constructed, SymbolTable, Variable};
use crate::{Error, Result};

/// One item of a declaration list.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationEntry {
    /// A single declaration.
    Single(Declaration),
    /// A background group.
    Background(Background),
    /// A declaration group bound at render time. The variable must construct
    /// a [`Background`]; anything else fails to render.
    Deferred(Variable),
}

impl DeclarationEntry {
    /// Render the entry; groups join their parts with `separator`.
    pub fn render(&self, symbols: &SymbolTable, separator: &Format) -> Result<String> {
        match self {
            DeclarationEntry::Single(declaration) => declaration.render(symbols),
            DeclarationEntry::Background(background) => Ok(background.render(separator)),
            DeclarationEntry::Deferred(variable) => match variable.construct(symbols)? {
                Constructed::Background(background) => Ok(background.render(separator)),
                other => Err(Error::invalid_value(
                    variable.reference().to_string(),
                    format!("'{}' is not a declaration group", other.render("", separator)),
                )),
            },
        }
    }
}

impl From<Declaration> for DeclarationEntry {
    fn from(declaration: Declaration) -> Self {
        DeclarationEntry::Single(declaration)
    }
}

impl From<Background> for DeclarationEntry {
    fn from(background: Background) -> Self {
        DeclarationEntry::Background(background)
    }
}

impl From<Variable> for DeclarationEntry {
    fn from(variable: Variable) -> Self {
        DeclarationEntry::Deferred(variable)
    }
}

/// The ordered declarations of a rule.
///
/// Rendered entries are joined with the list's format, a single space by
/// default. The format may be any whitespace, including none.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarations {
    entries: Vec<DeclarationEntry>,
    format: Format,
}

impl Declarations {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            format: Format::new(FormatKind::Declarations),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: impl Into<DeclarationEntry>) {
        self.entries.push(entry.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<&DeclarationEntry> {
        self.entries.get(index)
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &DeclarationEntry> {
        self.entries.iter()
    }

    /// Render every entry and join them.
    pub fn render(&self, symbols: &SymbolTable) -> Result<String> {
        let rendered = self
            .entries
            .iter()
            .map(|entry| entry.render(symbols, &self.format))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.format.join(rendered))
    }
}

impl Default for Declarations {
    fn default() -> Self {
        Self::new()
    }
}

impl Formattable for Declarations {
    fn format(&self) -> &Format {
        &self.format
    }

    fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }
}

impl<E: Into<DeclarationEntry>> FromIterator<E> for Declarations {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.push(entry);
        }
        list
    }
}

impl<E: Into<DeclarationEntry>> Extend<E> for Declarations {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Symbol, Value};
    use crate::variable::Transform;
    use crate::Error;

    #[test]
    fn joins_with_format() {
        let mut list: Declarations = [
            Declaration::new("margin", "0"),
            Declaration::new("padding", "1em"),
        ]
        .into_iter()
        .collect();
        let symbols = SymbolTable::new();
        assert_eq!(list.render(&symbols).unwrap(), "margin:0; padding:1em;");

        list.set_format("\n  ").unwrap();
        assert_eq!(list.render(&symbols).unwrap(), "margin:0;\n  padding:1em;");
    }

    #[test]
    fn rejected_format_keeps_default() {
        let mut list: Declarations = [Declaration::new("a", "1"), Declaration::new("b", "2")]
            .into_iter()
            .collect();
        assert!(matches!(list.set_format(" ; "), Err(Error::InvalidFormat { .. })));
        assert_eq!(list.format_template(), " ");
        assert_eq!(list.render(&SymbolTable::new()).unwrap(), "a:1; b:2;");
    }

    #[test]
    fn deferred_background_uses_list_separator() {
        let mut list = Declarations::new();
        list.push(Variable::with_transform(
            Value::mapping([
                ("color", Value::from(Symbol::new("bright"))),
                ("repeat", Value::from("no-repeat")),
            ]),
            Transform::Background,
        ));
        list.set_format("").unwrap();

        let symbols = SymbolTable::new().with("bright", "#0f0");
        assert_eq!(
            list.render(&symbols).unwrap(),
            "background-color:#0f0;background-repeat:no-repeat;"
        );
        assert!(list.render(&SymbolTable::new()).is_err());
    }

    #[test]
    fn deferred_entry_must_build_a_group() {
        let mut list = Declarations::new();
        list.push(Variable::symbol("weight"));

        let symbols = SymbolTable::new().with("weight", "bold");
        let err = list.render(&symbols).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref property, .. } if property == ":weight"));
    }

    #[test]
    fn mixed_entries() {
        let mut list = Declarations::new();
        list.push(Declaration::new("color", "red"));
        list.push(Background::from_value(&Value::mapping([("attachment", "scroll")])).unwrap());
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.render(&SymbolTable::new()).unwrap(),
            "color:red; background-attachment:scroll;"
        );
    }
}
