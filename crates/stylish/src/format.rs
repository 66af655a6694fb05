//! Format contracts for generated CSS.
//!
//! Every formattable entity (rules, declarations and the two collections that
//! join them) owns a [`Format`]: a template or separator string validated
//! against a fixed pattern. The patterns only admit whitespace variation
//! around the punctuation CSS requires, so any accepted template still
//! produces syntactically valid output.
//!
//! ```
//! use stylish::format::{Format, FormatKind};
//!
//! let mut format = Format::new(FormatKind::Declaration);
//! assert!(format.set("%property%: %value%;").is_ok());
//! assert!(format.set("%property% = %value%").is_err());
//! assert_eq!(format.template(), "%property%: %value%;");
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::logging::targets;
use crate::{Error, Result};

/// Placeholder for the joined selectors of a rule.
pub const SELECTORS: &str = "%selectors%";
/// Placeholder for the joined declarations of a rule.
pub const DECLARATIONS: &str = "%declarations%";
/// Placeholder for a declaration's property name.
pub const PROPERTY: &str = "%property%";
/// Placeholder for a declaration's value.
pub const VALUE: &str = "%value%";

/// The formattable entities and their contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Rule template, e.g. `"%selectors% {%declarations%}"`.
    Rule,
    /// Declaration template, e.g. `"%property%:%value%;"`.
    Declaration,
    /// Separator placed between the selectors of a rule.
    Selectors,
    /// Separator placed between the declarations of a rule.
    Declarations,
}

impl FormatKind {
    /// The template every new entity of this kind starts with.
    pub fn default_template(self) -> &'static str {
        match self {
            Self::Rule => "%selectors% {%declarations%}",
            Self::Declaration => "%property%:%value%;",
            Self::Selectors => ", ",
            Self::Declarations => " ",
        }
    }

    /// The placeholders a template of this kind contains, in order.
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            Self::Rule => &[SELECTORS, DECLARATIONS],
            Self::Declaration => &[PROPERTY, VALUE],
            Self::Selectors | Self::Declarations => &[],
        }
    }

    /// The compiled validation pattern (whole-string match).
    pub fn pattern(self) -> &'static Regex {
        static RULE: OnceLock<Regex> = OnceLock::new();
        static DECLARATION: OnceLock<Regex> = OnceLock::new();
        static SELECTORS: OnceLock<Regex> = OnceLock::new();
        static DECLARATIONS: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            Self::Rule => (&RULE, r"^\s*%selectors%\s*\{\s*%declarations%\s*\}\s*$"),
            Self::Declaration => (&DECLARATION, r"^\s*%property%\s*:\s*%value%;\s*$"),
            Self::Selectors => (&SELECTORS, r"^\s*,\s*$"),
            Self::Declarations => (&DECLARATIONS, r"^\s*$"),
        };

        cell.get_or_init(|| Regex::new(source).expect("format patterns are valid regexes"))
    }

    /// Check whether a template satisfies this kind's pattern.
    pub fn accepts(self, template: &str) -> bool {
        self.pattern().is_match(template)
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule => write!(f, "rule"),
            Self::Declaration => write!(f, "declaration"),
            Self::Selectors => write!(f, "selectors"),
            Self::Declarations => write!(f, "declarations"),
        }
    }
}

/// A validated template or separator.
///
/// The stored template always satisfies its kind's pattern. A rejected
/// assignment leaves the previous template in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    kind: FormatKind,
    template: String,
}

impl Format {
    /// Create a format holding the kind's default template.
    pub fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            template: kind.default_template().to_string(),
        }
    }

    /// The entity kind this format belongs to.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    /// The current template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the template if it satisfies the pattern.
    pub fn set(&mut self, template: impl Into<String>) -> Result<()> {
        let template = template.into();
        if !self.kind.accepts(&template) {
            tracing::debug!(
                target: targets::DECLARATION,
                kind = %self.kind,
                template = %template,
                "rejected format template"
            );
            return Err(Error::invalid_format(self.kind, template));
        }
        self.template = template;
        Ok(())
    }

    /// Restore the default template.
    pub fn reset(&mut self) {
        self.template = self.kind.default_template().to_string();
    }

    /// Join parts using the template as separator.
    pub fn join<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.template);
            }
            out.push_str(part.as_ref());
        }
        out
    }

    /// Substitute the kind's placeholders, in order, with `values`.
    ///
    /// Substituted text is never rescanned, so values that happen to contain
    /// placeholder text are emitted verbatim.
    pub fn fill(&self, values: &[&str]) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        for (placeholder, value) in self.kind.placeholders().iter().zip(values) {
            match rest.find(placeholder) {
                Some(at) => {
                    out.push_str(&rest[..at]);
                    out.push_str(value);
                    rest = &rest[at + placeholder.len()..];
                }
                None => break,
            }
        }

        out.push_str(rest);
        out
    }
}

/// Entities whose output texture is governed by a [`Format`].
pub trait Formattable {
    /// The entity's format.
    fn format(&self) -> &Format;

    /// Mutable access to the entity's format.
    fn format_mut(&mut self) -> &mut Format;

    /// The current template.
    fn format_template(&self) -> &str {
        self.format().template()
    }

    /// Assign a new template, keeping the old one on rejection.
    fn set_format(&mut self, template: impl Into<String>) -> Result<()>
    where
        Self: Sized,
    {
        self.format_mut().set(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_satisfy_their_patterns() {
        for kind in [
            FormatKind::Rule,
            FormatKind::Declaration,
            FormatKind::Selectors,
            FormatKind::Declarations,
        ] {
            assert!(kind.accepts(kind.default_template()), "{kind}");
        }
    }

    #[test]
    fn rule_whitespace_variation() {
        let mut format = Format::new(FormatKind::Rule);
        assert!(format.set("%selectors%\n{\n  %declarations%\n}\n").is_ok());
        assert!(format.set("%selectors% [%declarations%]").is_err());
        assert_eq!(format.template(), "%selectors%\n{\n  %declarations%\n}\n");
    }

    #[test]
    fn declarations_rejects_letters() {
        let mut format = Format::new(FormatKind::Declarations);
        let err = format.set(" x ").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { kind: FormatKind::Declarations, .. }));
        assert_eq!(format.template(), " ");

        assert!(format.set("").is_ok());
        assert!(format.set("\n\t").is_ok());
        assert_eq!(format.template(), "\n\t");
    }

    #[test]
    fn selectors_requires_one_comma() {
        let mut format = Format::new(FormatKind::Selectors);
        assert!(format.set(",\n").is_ok());
        assert!(format.set(" ,, ").is_err());
        assert!(format.set(" ").is_err());
        assert_eq!(format.template(), ",\n");
    }

    #[test]
    fn fill_substitutes_in_order() {
        let mut format = Format::new(FormatKind::Declaration);
        assert_eq!(format.fill(&["color", "red"]), "color:red;");

        format.set(" %property% : %value%; ").unwrap();
        assert_eq!(format.fill(&["color", "red"]), " color : red; ");
    }

    #[test]
    fn fill_does_not_rescan_values() {
        let format = Format::new(FormatKind::Rule);
        assert_eq!(format.fill(&["%declarations%", "a:b;"]), "%declarations% {a:b;}");
    }

    #[test]
    fn join_and_reset() {
        let mut format = Format::new(FormatKind::Selectors);
        assert_eq!(format.join(["a", "b", "c"]), "a, b, c");
        assert_eq!(format.join(Vec::<String>::new()), "");

        format.set(",").unwrap();
        assert_eq!(format.join(["a", "b"]), "a,b");
        format.reset();
        assert_eq!(format.template(), ", ");
    }
}
