//! Tagged values used for declaration values and symbol table entries.
//!
//! A [`Value`] is either a literal (string, number, boolean), a [`Symbol`]
//! standing in for a value supplied at render time, or a structure
//! (sequence or ordered mapping) whose leaves may themselves be symbols.
//!
//! # Example
//!
//! ```
//! use stylish::types::{Symbol, Value};
//!
//! let plain = Value::from("bold");
//! assert!(!plain.includes_symbols());
//!
//! let nested = Value::mapping([("image", Value::from(Symbol::new("button")))]);
//! assert!(nested.includes_symbols());
//! ```

use std::fmt;

/// A symbolic key looked up in a symbol table at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol. A leading `:` is stripped.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix(':') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(name),
        }
    }

    /// Parse `":name"` notation, returning `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let name = text.strip_prefix(':')?;
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
            return None;
        }
        Some(Self(name.to_string()))
    }

    /// The symbol name without the `:` sigil.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A literal, symbolic or structured value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string literal.
    Str(String),
    /// A numeric literal.
    Number(f64),
    /// A boolean literal.
    Bool(bool),
    /// A reference resolved against a symbol table.
    Symbol(Symbol),
    /// An ordered sequence.
    Sequence(Vec<Value>),
    /// A mapping that keeps insertion order.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Build a mapping from key/value pairs, keeping their order.
    ///
    /// A repeated key replaces the earlier entry in place.
    pub fn mapping<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            let key = key.into();
            let value = value.into();
            match map.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = value,
                None => map.push((key, value)),
            }
        }
        Value::Mapping(map)
    }

    /// Build a sequence.
    pub fn sequence<V, I>(items: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Whether this value is a symbol or contains one at any depth.
    pub fn includes_symbols(&self) -> bool {
        match self {
            Value::Symbol(_) => true,
            Value::Sequence(items) => items.iter().any(Value::includes_symbols),
            Value::Mapping(entries) => entries.iter().any(|(_, v)| v.includes_symbols()),
            Value::Str(_) | Value::Number(_) | Value::Bool(_) => false,
        }
    }

    /// Whether this is a string, number or boolean.
    pub fn is_literal(&self) -> bool {
        matches!(self, Value::Str(_) | Value::Number(_) | Value::Bool(_))
    }

    /// The string content, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The entries, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a mapping entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Symbol(symbol) => write!(f, "{symbol}"),
            Value::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Mapping(entries) => {
                for (i, (_, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Str(String::new()),
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::Sequence(
                items
                    .into_iter()
                    .filter(|item| !item.is_null())
                    .map(Value::from)
                    .collect(),
            ),
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .filter(|(_, v)| !v.is_null())
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
