//! HTML element shortcuts.
//!
//! [`Description::element`](crate::Description::element) accepts any name in
//! this table and appends a rule with that element as its selector.

/// Element names usable as builder shortcuts.
pub const HTML_ELEMENTS: &[&str] = &[
    "html", "head", "title", "base", "link", "meta", "style", "script", "noscript",
    "eventsource", "body", "section", "nav", "article", "aside", "header", "footer",
    "address", "p", "hr", "br", "pre", "dialog", "blockquote", "ol", "ul", "li", "dl", "dt",
    "dd", "a", "q", "cite", "em", "strong", "small", "mark", "dfn", "abbr", "time", "progress",
    "meter", "code", "var", "samp", "kbd", "sub", "sup", "span", "i", "b", "bdo", "ruby", "rt",
    "rp", "ins", "del", "figure", "img", "iframe", "embed", "object", "param", "video",
    "audio", "source", "canvas", "map", "area", "table", "caption", "colgroup", "col",
    "tbody", "thead", "tfoot", "tr", "td", "th", "form", "fieldset", "label", "input",
    "button", "select", "datalist", "optgroup", "option", "textarea", "output", "details",
    "datagrid", "command", "bb", "menu", "legend", "div",
];

/// Check whether `name` is a known element.
pub fn is_element(name: &str) -> bool {
    HTML_ELEMENTS.contains(&name)
}
