//! Error types for stylesheet construction and rendering.

use crate::format::FormatKind;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A variable referenced a symbol missing from the symbol table.
    #[error(":{name} could not be located in the symbol table")]
    UndefinedVariable { name: String },

    /// A format template failed its validation pattern.
    #[error("Invalid {kind} format {template:?}")]
    InvalidFormat { kind: FormatKind, template: String },

    /// A variable transform could not be built from its resolved value.
    #[error("Invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },

    /// The builder was given a selector it cannot use.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A symbol table supplied as JSON could not be parsed.
    #[error("Invalid symbol table: {0}")]
    InvalidSymbolTable(#[from] serde_json::Error),
}

impl Error {
    /// Create an undefined variable error.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    /// Create a format error.
    pub fn invalid_format(kind: FormatKind, template: impl Into<String>) -> Self {
        Self::InvalidFormat {
            kind,
            template: template.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
