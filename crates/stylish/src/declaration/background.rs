//! The `background` declaration group.
//!
//! A [`Background`] owns up to five sub-values, each validated when set.
//! Input is handled tolerantly: a value outside a sub-property's domain is
//! dropped and the sub-property keeps its previous state (unset, for a freshly
//! built group). No error is raised; format templates and variable lookups,
//! by contrast, return errors.
//!
//! Two serializations are available:
//!
//! - expanded (default): one declaration per set sub-value, using the full
//!   property name, joined by the owning list's declarations format;
//! - compressed: one `background:` shorthand listing the set sub-values in
//!   canonical order.
//!
//! ```
//! use stylish::declaration::Background;
//! use stylish::format::{Format, FormatKind};
//! use stylish::types::Value;
//!
//! let separator = Format::new(FormatKind::Declarations);
//! let mut bg = Background::from_value(&Value::mapping([
//!     ("color", "#fff"),
//!     ("repeat", "no-repeat"),
//! ]))
//! .unwrap();
//! assert_eq!(bg.render(&separator), "background-color:#fff; background-repeat:no-repeat;");
//!
//! bg.set_compressed(true);
//! assert_eq!(bg.render(&separator), "background:#fff no-repeat;");
//! ```

use crate::format::{Format, FormatKind, Formattable};
use crate::logging::targets;
use crate::types::{Color, Value};
use crate::{Error, Result};

/// Sub-properties in canonical order, with their CSS property names.
pub const PROPERTIES: [(&str, &str); 5] = [
    ("color", "background-color"),
    ("image", "background-image"),
    ("repeat", "background-repeat"),
    ("position", "background-position"),
    ("attachment", "background-attachment"),
];

/// Accepted `background-repeat` keywords.
pub const REPEAT_VALUES: [&str; 4] = ["repeat", "repeat-x", "repeat-y", "no-repeat"];
/// Accepted `background-attachment` keywords.
pub const ATTACHMENT_VALUES: [&str; 3] = ["scroll", "fixed", "inherit"];
/// Accepted horizontal position keywords.
pub const HORIZONTAL_POSITIONS: [&str; 3] = ["left", "center", "right"];
/// Accepted vertical position keywords.
pub const VERTICAL_POSITIONS: [&str; 3] = ["top", "center", "bottom"];

const SHORTHAND: &str = "background";

/// A validated cluster of `background-*` declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    color: Option<Color>,
    image: Option<String>,
    repeat: Option<&'static str>,
    position: Option<(&'static str, &'static str)>,
    attachment: Option<&'static str>,
    compressed: bool,
    format: Format,
}

impl Background {
    /// Create a group with no sub-values set.
    pub fn new() -> Self {
        Self {
            color: None,
            image: None,
            repeat: None,
            position: None,
            attachment: None,
            compressed: false,
            format: Format::new(FormatKind::Declaration),
        }
    }

    /// Build a group from a mapping of sub-property names to raw values.
    ///
    /// Keys may be short (`color`) or full (`background-color`); the extra key
    /// `compressed` sets the serialization mode. Unknown keys and invalid
    /// values are ignored. Anything other than a mapping is an error.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = value.as_mapping().ok_or_else(|| {
            Error::invalid_value(SHORTHAND, "expected a mapping of background properties")
        })?;

        let mut background = Self::new();
        for (name, raw) in entries {
            background.set(name, raw);
        }
        Ok(background)
    }

    /// Set a sub-property by name, returning whether the value was accepted.
    pub fn set(&mut self, name: &str, raw: &Value) -> bool {
        let name = name.strip_prefix("background-").unwrap_or(name);
        match name {
            "color" => self.set_color(raw),
            "image" => self.set_image(raw),
            "repeat" => self.set_repeat(raw),
            "position" => self.set_position(raw),
            "attachment" => self.set_attachment(raw),
            "compressed" => {
                self.set_compressed(raw.clone());
                true
            }
            _ => {
                tracing::debug!(
                    target: targets::DECLARATION,
                    property = name,
                    "ignoring unknown background property"
                );
                false
            }
        }
    }

    /// Set the color if `raw` is a valid color.
    pub fn set_color(&mut self, raw: &Value) -> bool {
        match raw.as_str().and_then(Color::parse) {
            Some(color) => {
                self.color = Some(color);
                true
            }
            None => rejected("color", raw),
        }
    }

    /// Set the image path. Any string is accepted.
    pub fn set_image(&mut self, raw: &Value) -> bool {
        match raw.as_str() {
            Some(path) => {
                self.image = Some(path.to_string());
                true
            }
            None => rejected("image", raw),
        }
    }

    /// Set the repeat keyword if it is one of [`REPEAT_VALUES`].
    pub fn set_repeat(&mut self, raw: &Value) -> bool {
        match raw.as_str().and_then(|v| keyword_in(&REPEAT_VALUES, v)) {
            Some(keyword) => {
                self.repeat = Some(keyword);
                true
            }
            None => rejected("repeat", raw),
        }
    }

    /// Set the position from `"X"` or `"X Y"` keywords.
    ///
    /// Only keywords are handled, not lengths or percentages. A missing
    /// vertical keyword defaults to `center`; words after the second are
    /// ignored.
    pub fn set_position(&mut self, raw: &Value) -> bool {
        let text = match raw {
            Value::Str(s) => Some(s.clone()),
            Value::Sequence(items) if items.iter().all(Value::is_literal) => Some(raw.to_string()),
            _ => None,
        };
        match text.as_deref().and_then(parse_position) {
            Some(position) => {
                self.position = Some(position);
                true
            }
            None => rejected("position", raw),
        }
    }

    /// Set the attachment keyword if it is one of [`ATTACHMENT_VALUES`].
    pub fn set_attachment(&mut self, raw: &Value) -> bool {
        match raw.as_str().and_then(|v| keyword_in(&ATTACHMENT_VALUES, v)) {
            Some(keyword) => {
                self.attachment = Some(keyword);
                true
            }
            None => rejected("attachment", raw),
        }
    }

    /// Compress only when given boolean `true`; anything else clears the flag.
    pub fn set_compressed(&mut self, flag: impl Into<Value>) {
        self.compressed = matches!(flag.into(), Value::Bool(true));
    }

    /// The color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// The image path, if set.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// The repeat keyword, if set.
    pub fn repeat(&self) -> Option<&str> {
        self.repeat
    }

    /// The horizontal and vertical position keywords, if set.
    pub fn position(&self) -> Option<(&str, &str)> {
        self.position
    }

    /// The attachment keyword, if set.
    pub fn attachment(&self) -> Option<&str> {
        self.attachment
    }

    /// Whether the shorthand form is rendered.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Full property names of the set sub-values, in canonical order.
    pub fn properties(&self) -> Vec<&'static str> {
        self.values().into_iter().map(|(property, _)| property).collect()
    }

    /// Property names and rendered values of the set sub-values, in canonical order.
    pub fn values(&self) -> Vec<(&'static str, String)> {
        PROPERTIES
            .iter()
            .filter_map(|&(name, property)| {
                let value = match name {
                    "color" => self.color.as_ref().map(Color::to_string),
                    "image" => self.image.as_deref().map(image_value),
                    "repeat" => self.repeat.map(str::to_string),
                    "position" => self.position.map(|(x, y)| format!("{x} {y}")),
                    "attachment" => self.attachment.map(str::to_string),
                    _ => None,
                };
                value.map(|v| (property, v))
            })
            .collect()
    }

    /// Render in the current mode; expanded declarations are joined by `separator`.
    pub fn render(&self, separator: &Format) -> String {
        let values = self.values();
        if self.compressed {
            let joined = values
                .iter()
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.format.fill(&[SHORTHAND, joined.as_str()])
        } else {
            separator.join(
                values
                    .iter()
                    .map(|(property, v)| self.format.fill(&[*property, v.as_str()])),
            )
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

impl Formattable for Background {
    fn format(&self) -> &Format {
        &self.format
    }

    fn format_mut(&mut self) -> &mut Format {
        &mut self.format
    }
}

fn rejected(property: &str, raw: &Value) -> bool {
    tracing::debug!(
        target: targets::DECLARATION,
        property,
        value = %raw,
        "dropping invalid background value"
    );
    false
}

fn keyword_in(domain: &[&'static str], value: &str) -> Option<&'static str> {
    domain.iter().copied().find(|keyword| *keyword == value)
}

fn parse_position(text: &str) -> Option<(&'static str, &'static str)> {
    let mut words = text.split_whitespace();
    let x = words.next()?;
    let y = words.next().unwrap_or("center");
    Some((
        keyword_in(&HORIZONTAL_POSITIONS, x)?,
        keyword_in(&VERTICAL_POSITIONS, y)?,
    ))
}

fn image_value(path: &str) -> String {
    if path == "none" || path.starts_with("url(") {
        path.to_string()
    } else {
        format!("url('{path}')")
    }
}
