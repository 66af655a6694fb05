//! Color values.
//!
//! Colors are validated by tokenizing with `cssparser` and are stored in the
//! normalized text form they render as. Hex values keep their written length,
//! keywords become six-digit hex.

use std::fmt;

use cssparser::{ParseError, Parser, ParserInput, Token};

/// A validated CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    text: String,
}

/// Basic CSS keywords and their hex values.
const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("silver", "#c0c0c0"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("white", "#ffffff"),
    ("maroon", "#800000"),
    ("red", "#ff0000"),
    ("purple", "#800080"),
    ("fuchsia", "#ff00ff"),
    ("green", "#008000"),
    ("lime", "#00ff00"),
    ("olive", "#808000"),
    ("yellow", "#ffff00"),
    ("navy", "#000080"),
    ("blue", "#0000ff"),
    ("teal", "#008080"),
    ("aqua", "#00ffff"),
    ("orange", "#ffa500"),
];

impl Color {
    /// Parse a color, returning `None` if the text is not a color.
    ///
    /// Accepted forms: `#rgb`, `#rrggbb` (with or without `#`), the basic
    /// keywords, `transparent`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    ///
    /// ```
    /// use stylish::types::Color;
    ///
    /// assert_eq!(Color::parse("f00").unwrap().to_string(), "#f00");
    /// assert_eq!(Color::parse("green").unwrap().to_string(), "#008000");
    /// assert!(Color::parse("not-a-color").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Bare hex digits tokenize as identifiers or dimensions.
        if let Some(hex) = normalize_hex(text) {
            return Some(Self { text: hex });
        }

        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        parser
            .parse_entirely(parse_color_value)
            .ok()
            .map(|text| Self { text })
    }

    /// The normalized text form.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn normalize_hex(digits: &str) -> Option<String> {
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    let valid_len = matches!(digits.len(), 3 | 6);
    if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(format!("#{}", digits.to_ascii_lowercase()))
    } else {
        None
    }
}

fn named_color(name: &str) -> Option<&'static str> {
    if name.eq_ignore_ascii_case("transparent") {
        return Some("transparent");
    }
    NAMED_COLORS
        .iter()
        .find(|(keyword, _)| name.eq_ignore_ascii_case(keyword))
        .map(|(_, hex)| *hex)
}

fn parse_color_value<'i>(
    parser: &mut Parser<'i, '_>,
) -> std::result::Result<String, ParseError<'i, ()>> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(hash) | Token::IDHash(hash) => {
            normalize_hex(&hash).ok_or_else(|| parser.new_custom_error(()))
        }
        Token::Ident(name) => named_color(&name)
            .map(str::to_string)
            .ok_or_else(|| parser.new_custom_error(())),
        Token::Function(name)
            if name.eq_ignore_ascii_case("rgb") || name.eq_ignore_ascii_case("rgba") =>
        {
            parser.parse_nested_block(|p| {
                let r = parse_channel(p)?;
                p.expect_comma()?;
                let g = parse_channel(p)?;
                p.expect_comma()?;
                let b = parse_channel(p)?;
                if p.try_parse(|p| p.expect_comma()).is_ok() {
                    let a = parse_alpha(p)?;
                    Ok(format!("rgba({r},{g},{b},{a})"))
                } else {
                    Ok(format!("rgb({r},{g},{b})"))
                }
            })
        }
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_channel<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<u8, ParseError<'i, ()>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 255.0).round() as u8),
        Token::Percentage { unit_value, .. } => Ok((unit_value.clamp(0.0, 1.0) * 255.0).round() as u8),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> std::result::Result<f32, ParseError<'i, ()>> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(value.clamp(0.0, 1.0)),
        Token::Percentage { unit_value, .. } => Ok(unit_value.clamp(0.0, 1.0)),
        _ => Err(parser.new_custom_error(())),
    }
}
