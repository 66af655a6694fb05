//! Selector lists joined by the selectors format.

use crate::format::{Format, FormatKind, Formattable};
use crate::selector::SelectorItem;
use crate::variable::SymbolTable;
use crate::Result;

/// The ordered selectors of a rule.
///
/// Rendered selectors are joined with the list's format, `", "` by default.
#[derive(Debug, Clone, PartialEq)]
pub struct Selectors {
    items: Vec<SelectorItem>,
    format: Format,
}

impl Selectors {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            format: Format::new(FormatKind::Selectors),
        }
    }

    /// Append a selector.
    pub fn push(&mut self, item: impl Into<SelectorItem>) {
        self.items.push(item.into());
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the selectors.
    pub fn iter(&self) -> impl Iterator<Item = &SelectorItem> {
        self.items.iter()
    }

    /// Render each selector under `scope` and join them.
    pub fn render(&self, symbols: &SymbolTable, scope: &str) -> Result<String> {
        let rendered = self
            .items
            .iter()
            .map(|item| item.render(symbols, scope))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.format.join(rendered))
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

impl Formattable for Selectors {
    fn format(&self) -> &Format {
        &self.format
    }

    fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }
}

impl<S: Into<SelectorItem>> FromIterator<S> for Selectors {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}
