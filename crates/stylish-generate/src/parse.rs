//! Turning builder key/value pairs into declarations.
//!
//! Property names have underscores rewritten to hyphens. Each pair is then
//! offered to the registered [`DeclarationExtension`]s; the ones whose
//! `applicable` predicate holds build the entry in registration order, each
//! seeing the previous extension's result. Pairs no extension claims become
//! plain declarations, wrapped in a variable when the value includes symbols.

use stylish::declaration::{Background, Declaration, DeclarationEntry, Declarations};
use stylish::types::{Color, Value};
use stylish::variable::{Transform, Variable};

/// A special-cased declaration shape.
pub trait DeclarationExtension: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Whether this extension handles the pair.
    fn applicable(&self, property: &str, value: &Value) -> bool;

    /// Build the entry. `previous` is the result of an earlier applicable
    /// extension, if any.
    fn parse(
        &self,
        property: &str,
        value: &Value,
        previous: Option<DeclarationEntry>,
    ) -> DeclarationEntry;
}

/// `background` with a mapping value becomes a [`Background`] group.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackgroundExtension;

impl DeclarationExtension for BackgroundExtension {
    fn name(&self) -> &str {
        "background"
    }

    fn applicable(&self, property: &str, value: &Value) -> bool {
        property == "background" && value.as_mapping().is_some()
    }

    fn parse(
        &self,
        property: &str,
        value: &Value,
        _previous: Option<DeclarationEntry>,
    ) -> DeclarationEntry {
        if value.includes_symbols() {
            return Variable::with_transform(value.clone(), Transform::Background).into();
        }
        match Background::from_value(value) {
            Ok(background) => background.into(),
            Err(_) => Declaration::new(property, value.clone()).into(),
        }
    }
}

/// Color properties get normalized colors, or color variables for symbols.
///
/// Literal values that are not colors are kept as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorExtension;

impl DeclarationExtension for ColorExtension {
    fn name(&self) -> &str {
        "color"
    }

    fn applicable(&self, property: &str, value: &Value) -> bool {
        (property == "color" || property.ends_with("-color"))
            && matches!(value, Value::Str(_) | Value::Symbol(_))
    }

    fn parse(
        &self,
        property: &str,
        value: &Value,
        _previous: Option<DeclarationEntry>,
    ) -> DeclarationEntry {
        match value {
            Value::Symbol(_) => {
                Declaration::new(property, Variable::with_transform(value.clone(), Transform::Color))
                    .into()
            }
            Value::Str(text) => match Color::parse(text) {
                Some(color) => Declaration::new(property, color).into(),
                None => Declaration::new(property, value.clone()).into(),
            },
            _ => Declaration::new(property, value.clone()).into(),
        }
    }
}

/// Registry of declaration extensions.
pub struct DeclarationParser {
    extensions: Vec<Box<dyn DeclarationExtension>>,
}

impl DeclarationParser {
    /// Create a parser with no extensions.
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Register an extension after the existing ones.
    pub fn register(&mut self, extension: impl DeclarationExtension + 'static) -> &mut Self {
        self.extensions.push(Box::new(extension));
        self
    }

    /// Names of the registered extensions, in order.
    pub fn extension_names(&self) -> Vec<&str> {
        self.extensions.iter().map(|e| e.name()).collect()
    }

    /// Rewrite a builder key into a CSS property name.
    pub fn normalize_property(name: &str) -> String {
        name.replace('_', "-")
    }

    /// Build the entry for one pair.
    pub fn parse_declaration(&self, property: &str, value: Value) -> DeclarationEntry {
        let property = Self::normalize_property(property);

        let claimed = self.extensions.iter().fold(None, |previous, extension| {
            if extension.applicable(&property, &value) {
                tracing::trace!(
                    target: stylish::logging::targets::GENERATE,
                    extension = extension.name(),
                    property = %property,
                    "declaration claimed by extension"
                );
                Some(extension.parse(&property, &value, previous))
            } else {
                previous
            }
        });

        claimed.unwrap_or_else(|| Declaration::new(property, value).into())
    }

    /// Build a declaration list from pairs, keeping their order.
    pub fn parse<I, K, V>(&self, pairs: I) -> Declarations
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        pairs
            .into_iter()
            .map(|(property, value)| self.parse_declaration(property.as_ref(), value.into()))
            .collect()
    }
}

impl Default for DeclarationParser {
    fn default() -> Self {
        let mut parser = Self::new();
        parser.register(BackgroundExtension).register(ColorExtension);
        parser
    }
}

impl std::fmt::Debug for DeclarationParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationParser")
            .field("extensions", &self.extension_names())
            .finish()
    }
}

/// Parse pairs with the default extensions.
pub fn parse_declarations<I, K, V>(pairs: I) -> Declarations
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    DeclarationParser::default().parse(pairs)
}
