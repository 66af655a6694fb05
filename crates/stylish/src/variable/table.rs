//! Symbol tables supplied when rendering.

use std::collections::HashMap;

use crate::logging::targets;
use crate::types::Value;
use crate::Result;

/// Values for the symbols referenced by variables in a tree.
///
/// Names may be given with or without the leading `:`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    symbols: HashMap<String, Value>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON object.
    ///
    /// Object keys become symbol names; nested arrays and objects become
    /// sequences and mappings in document order.
    ///
    /// ```
    /// use stylish::variable::SymbolTable;
    ///
    /// let table = SymbolTable::from_json(r#"{"accent": "bold", "size": 1.5}"#).unwrap();
    /// assert_eq!(table.get("accent").unwrap().to_string(), "bold");
    /// assert_eq!(table.get(":size").unwrap().to_string(), "1.5");
    /// ```
    ///
    /// Keys bound to `null` are left undefined, so rendering a variable that
    /// references one fails with [`Error::UndefinedVariable`](crate::Error::UndefinedVariable).
    pub fn from_json(json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(map
            .into_iter()
            .filter(|(name, value)| {
                if value.is_null() {
                    tracing::debug!(target: targets::VARIABLE, symbol = %name, "skipping null symbol");
                }
                !value.is_null()
            })
            .collect())
    }

    /// Set a symbol's value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        // Remove leading ":" if present
        let name = name.strip_prefix(':').unwrap_or(&name).to_string();
        self.symbols.insert(name, value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a symbol's value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let name = name.strip_prefix(':').unwrap_or(name);
        self.symbols.get(name)
    }

    /// Check if a symbol is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all symbols.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.symbols.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clear all symbols.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolTable
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn set_get() {
        let mut table = SymbolTable::new();
        table.set(":accent", "bold");

        assert_eq!(table.get("accent"), Some(&Value::from("bold")));
        assert_eq!(table.get(":accent"), Some(&Value::from("bold")));
        assert!(table.contains("accent"));
        assert!(!table.contains("missing"));
        assert_eq!(table.len(), 1);

        table.clear();
        assert!(table.is_empty());
    }

    #[test]
    fn collect_pairs() {
        let table: SymbolTable = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("b"), Some(&Value::from("2")));
    }

    #[test]
    fn json_tables() {
        let table = SymbolTable::from_json(r##"{"bg": {"color": "#0f0", "repeat": "no-repeat"}}"##)
            .unwrap();
        let bg = table.get("bg").unwrap();
        assert_eq!(bg.get("repeat"), Some(&Value::from("no-repeat")));

        let err = SymbolTable::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidSymbolTable(_)));
    }

    #[test]
    fn json_null_leaves_symbol_undefined() {
        let table = SymbolTable::from_json(r#"{"fg": null, "bg": "white"}"#).unwrap();
        assert!(!table.contains("fg"));
        assert!(table.contains("bg"));
        assert_eq!(table.len(), 1);
    }
}
