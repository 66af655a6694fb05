//! The builder DSL.

use stylish::declaration::Declarations;
use stylish::logging::targets;
use stylish::rules::{Comment, Rule};
use stylish::selector::{Selector, SelectorItem, Selectors};
use stylish::tree::Node;
use stylish::types::{Symbol, Value};
use stylish::variable::Variable;
use stylish::{Error, Result};

use crate::elements::is_element;
use crate::parse::DeclarationParser;

/// Values accepted wherever the builder expects one or more selectors.
///
/// Text in `:name` notation and [`Symbol`]s become selector variables bound
/// at render time.
pub trait IntoSelectors {
    /// Convert into selector items.
    fn into_selectors(self) -> Vec<SelectorItem>;
}

fn selector_from_text(text: &str) -> SelectorItem {
    match Symbol::parse(text) {
        Some(symbol) => Variable::selector(symbol.name()).into(),
        None => Selector::new(text).into(),
    }
}

impl IntoSelectors for &str {
    fn into_selectors(self) -> Vec<SelectorItem> {
        vec![selector_from_text(self)]
    }
}

impl IntoSelectors for String {
    fn into_selectors(self) -> Vec<SelectorItem> {
        vec![selector_from_text(&self)]
    }
}

impl IntoSelectors for Symbol {
    fn into_selectors(self) -> Vec<SelectorItem> {
        vec![Variable::selector(self.name()).into()]
    }
}

impl IntoSelectors for Selector {
    fn into_selectors(self) -> Vec<SelectorItem> {
        vec![self.into()]
    }
}

impl IntoSelectors for Variable {
    fn into_selectors(self) -> Vec<SelectorItem> {
        vec![self.into()]
    }
}

impl<T: IntoSelectors> IntoSelectors for Vec<T> {
    fn into_selectors(self) -> Vec<SelectorItem> {
        self.into_iter().flat_map(IntoSelectors::into_selectors).collect()
    }
}

impl<T: IntoSelectors, const N: usize> IntoSelectors for [T; N] {
    fn into_selectors(self) -> Vec<SelectorItem> {
        self.into_iter().flat_map(IntoSelectors::into_selectors).collect()
    }
}

/// Builder bound to one node of a tree.
///
/// Blocks passed to [`generate`](crate::generate) and to the nesting methods
/// receive a `Description` for the node they populate.
pub struct Description<'a> {
    node: &'a mut Node,
    parser: &'a DeclarationParser,
}

impl<'a> Description<'a> {
    /// Create a builder appending into `node`.
    pub fn new(node: &'a mut Node, parser: &'a DeclarationParser) -> Self {
        Self { node, parser }
    }

    /// The node being populated.
    pub fn node(&mut self) -> &mut Node {
        self.node
    }

    /// Append one rule applying `declarations` to `selectors`.
    ///
    /// A call without declarations adds nothing.
    pub fn rule<S, I, K, V>(&mut self, selectors: S, declarations: I) -> &mut Self
    where
        S: IntoSelectors,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let declarations = self.parser.parse(declarations);
        if declarations.is_empty() {
            tracing::debug!(target: targets::GENERATE, "skipping rule without declarations");
            return self;
        }
        self.node
            .append(Rule::from_parts(selectors.into_selectors().into_iter().collect(), declarations));
        self
    }

    /// Open a nested scope for each selector and run `block` inside it.
    pub fn scope<S, F>(&mut self, selectors: S, block: F) -> Result<&mut Self>
    where
        S: IntoSelectors,
        F: FnMut(&mut Description<'_>) -> Result<()>,
    {
        self.nest(selectors.into_selectors(), Declarations::new(), block)
    }

    /// Append a rule for each selector, then open a nested scope for it.
    ///
    /// This is the combined form: each selector gets its own rule carrying
    /// `declarations` (skipped when empty) followed by a scope in which
    /// `block` runs.
    pub fn rule_with_scope<S, I, K, V, F>(
        &mut self,
        selectors: S,
        declarations: I,
        block: F,
    ) -> Result<&mut Self>
    where
        S: IntoSelectors,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
        F: FnMut(&mut Description<'_>) -> Result<()>,
    {
        let declarations = self.parser.parse(declarations);
        self.nest(selectors.into_selectors(), declarations, block)
    }

    /// Shortcut for [`rule`](Self::rule) with an element name as selector.
    pub fn element<I, K, V>(&mut self, name: &str, declarations: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        check_element(name)?;
        Ok(self.rule(Selector::new(name), declarations))
    }

    /// Shortcut for [`scope`](Self::scope) with an element name as selector.
    pub fn element_scope<F>(&mut self, name: &str, block: F) -> Result<&mut Self>
    where
        F: FnMut(&mut Description<'_>) -> Result<()>,
    {
        check_element(name)?;
        self.scope(Selector::new(name), block)
    }

    /// Append a comment.
    pub fn comment<L, M, K, V>(&mut self, header: &str, lines: L, metadata: M) -> &mut Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.node.append(Comment::with_parts(header, lines, metadata));
        self
    }

    fn nest<F>(
        &mut self,
        selectors: Vec<SelectorItem>,
        declarations: Declarations,
        mut block: F,
    ) -> Result<&mut Self>
    where
        F: FnMut(&mut Description<'_>) -> Result<()>,
    {
        for selector in selectors {
            if !declarations.is_empty() {
                let mut single = Selectors::new();
                single.push(selector.clone());
                self.node.append(Rule::from_parts(single, declarations.clone()));
            }

            let mut scope = Node::scoped(selector);
            block(&mut Description::new(&mut scope, self.parser))?;
            self.node.append(scope);
        }
        Ok(self)
    }
}

fn check_element(name: &str) -> Result<()> {
    if is_element(name) {
        Ok(())
    } else {
        Err(Error::invalid_selector(name, "not a known HTML element"))
    }
}
