//! Single rule definition.

use crate::declaration::{DeclarationEntry, Declarations};
use crate::format::{Format, FormatKind, Formattable};
use crate::selector::{SelectorItem, Selectors};
use crate::variable::SymbolTable;
use crate::Result;

/// A rule pairing selectors with declarations.
///
/// A rule without selectors or declarations is allowed; it renders with an
/// empty selector or declaration segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// The selectors this rule applies to.
    pub selectors: Selectors,
    /// The declarations to apply.
    pub declarations: Declarations,
    format: Format,
}

impl Rule {
    /// Create a rule from selectors and declaration entries.
    pub fn new<S, D>(selectors: S, declarations: D) -> Self
    where
        S: IntoIterator,
        S::Item: Into<SelectorItem>,
        D: IntoIterator,
        D::Item: Into<DeclarationEntry>,
    {
        Self::from_parts(
            selectors.into_iter().collect(),
            declarations.into_iter().collect(),
        )
    }

    /// Create a rule from prepared lists, keeping their formats.
    pub fn from_parts(selectors: Selectors, declarations: Declarations) -> Self {
        Self {
            selectors,
            declarations,
            format: Format::new(FormatKind::Rule),
        }
    }

    /// Render with every selector prefixed by `scope`.
    pub fn render(&self, symbols: &SymbolTable, scope: &str) -> Result<String> {
        let selectors = self.selectors.render(symbols, scope)?;
        let declarations = self.declarations.render(symbols)?;
        Ok(self.format.fill(&[selectors.as_str(), declarations.as_str()]))
    }
}

impl Formattable for Rule {
    fn format(&self) -> &Format {
        &self.format
    }

    fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }
}
