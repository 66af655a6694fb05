//! Integration tests for the builder DSL.

use stylish::prelude::*;
use stylish_generate::{generate, generate_with, DeclarationParser};
use tracing_subscriber::filter::LevelFilter;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(LevelFilter::TRACE)
        .try_init();
}

fn render(node: &Node) -> String {
    node.render(&SymbolTable::new(), "").unwrap()
}

#[test]
fn nested_rules_and_background_shortcut() {
    setup();
    let style = generate(|s| {
        s.rule(".header", [("background", Value::mapping([("color", "green")]))]);
        s.scope(".content", |s| {
            s.rule("H1", [("font-size", "2em")]);
            s.rule("P", [("margin-bottom", "10px")]);
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(style.rules().len(), 3);
    let lines: Vec<String> = render(&style).lines().map(str::to_string).collect();
    assert_eq!(lines[0], ".header {background-color:#008000;}");
    assert_eq!(lines[1], ".content H1 {font-size:2em;}");
    assert_eq!(lines[2], ".content P {margin-bottom:10px;}");
}

#[test]
fn value_variables_render_from_symbols() {
    let style = generate(|s| {
        s.element("div", [("font_weight", Symbol::new("weighty"))])?;
        Ok(())
    })
    .unwrap();

    let declaration = style.rules()[0].declarations.get(0).cloned();
    assert!(matches!(
        declaration,
        Some(DeclarationEntry::Single(ref d)) if matches!(d.value(), Renderable::Variable(_))
    ));

    let symbols = SymbolTable::new().with("weighty", "bold");
    assert_eq!(style.render(&symbols, "").unwrap(), "div {font-weight:bold;}");
}

#[test]
fn selector_variables_render_from_symbols() {
    let style = generate(|s| {
        s.rule(Symbol::new("some_selector"), [("line_height", 1.5)]);
        Ok(())
    })
    .unwrap();

    let symbols = SymbolTable::new().with("some_selector", "body p");
    assert_eq!(style.render(&symbols, "").unwrap(), "body p {line-height:1.5;}");

    let err = style.render(&SymbolTable::new(), "").unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { ref name } if name == "some_selector"));
}

#[test]
fn symbol_notation_in_selector_text() {
    let style = generate(|s| {
        s.rule(":main", [("padding", "0")]);
        Ok(())
    })
    .unwrap();

    let symbols = SymbolTable::new().with("main", "#main");
    assert_eq!(style.render(&symbols, "").unwrap(), "#main {padding:0;}");
}

#[test]
fn rule_without_declarations_is_skipped() {
    let empty: [(&str, &str); 0] = [];
    let style = generate(|s| {
        s.rule("p", empty);
        Ok(())
    })
    .unwrap();
    assert!(style.is_empty());
}

#[test]
fn rule_with_scope_emits_rule_then_scope_per_selector() {
    let style = generate(|s| {
        s.rule_with_scope(["ul", "ol"], [("margin", "0")], |s| {
            s.element("li", [("list-style", "none")])?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(style.len(), 4);
    assert_eq!(
        render(&style),
        "ul {margin:0;}\nul li {list-style:none;}\nol {margin:0;}\nol li {list-style:none;}"
    );
}

#[test]
fn multiple_selectors_share_one_rule() {
    let style = generate(|s| {
        s.rule(vec!["h1", "h2"], [("margin", "0")]);
        Ok(())
    })
    .unwrap();
    assert_eq!(render(&style), "h1, h2 {margin:0;}");
}

#[test]
fn unknown_element_is_rejected() {
    setup();
    let err = generate(|s| {
        s.element("blink-tag", [("color", "red")])?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidSelector { ref selector, .. } if selector == "blink-tag"));

    let err = generate(|s| {
        s.element_scope("notanelement", |_| Ok(()))?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, Error::InvalidSelector { .. }));
}

#[test]
fn comments_and_elements_mix() {
    let style = generate(|s| {
        s.comment("Layout", ["Base styles"], [("author", "Web Team")]);
        s.element_scope("nav", |s| {
            s.element("a", [("color", "blue")])?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap();

    assert_eq!(style.comments().len(), 1);
    assert_eq!(
        render(&style),
        "/**\n * Layout\n *\n * Base styles\n *\n * @author Web Team\n */\nnav a {color:#0000ff;}"
    );
}

#[test]
fn deferred_background_resolves_at_render() {
    let style = generate(|s| {
        s.rule(
            "body",
            [("background", Value::mapping([("color", Value::from(Symbol::new("brand")))]))],
        );
        Ok(())
    })
    .unwrap();

    let symbols = SymbolTable::new().with("brand", "#00f");
    assert_eq!(style.render(&symbols, "").unwrap(), "body {background-color:#00f;}");
}

#[test]
fn custom_parser_without_extensions() {
    let parser = DeclarationParser::new();
    let style = generate_with(&parser, |s| {
        s.rule("p", [("color", "green")]);
        Ok(())
    })
    .unwrap();
    assert_eq!(render(&style), "p {color:green;}");
}

#[test]
fn block_errors_propagate() {
    let err = generate(|s| {
        s.scope(".outer", |_| Err(Error::undefined_variable("missing")))?;
        Ok(())
    })
    .unwrap_err();
    assert!(matches!(err, Error::UndefinedVariable { .. }));
}
