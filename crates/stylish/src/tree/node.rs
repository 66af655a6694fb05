//! Tree nodes and leaves.
//!
//! A stylesheet is a tree: the root [`Node`] has no selector scope, nested
//! nodes carry one, and [`Leaf`] children (rules and comments) hold the
//! content. Rendering walks the tree top-down, composing scopes textually and
//! threading the symbol table through every descendant.
//!
//! # Example
//!
//! ```
//! use stylish::prelude::*;
//!
//! let mut content = Node::scoped(".content");
//! content.append(Rule::new(["p"], [Declaration::new("margin-bottom", "10px")]));
//!
//! let mut root = Node::root();
//! root.append(Rule::new(["body"], [Declaration::new("margin", "1em")]))
//!     .append(content);
//!
//! assert_eq!(
//!     root.render(&SymbolTable::new(), "").unwrap(),
//!     "body {margin:1em;}\n.content p {margin-bottom:10px;}"
//! );
//! ```

use crate::logging::targets;
use crate::rules::{Comment, Rule};
use crate::selector::SelectorItem;
use crate::variable::SymbolTable;
use crate::Result;

/// A rule or comment.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// A rule.
    Rule(Rule),
    /// A comment.
    Comment(Comment),
}

impl Leaf {
    /// Render under `scope`. Comments ignore both arguments.
    pub fn render(&self, symbols: &SymbolTable, scope: &str) -> Result<String> {
        match self {
            Leaf::Rule(rule) => rule.render(symbols, scope),
            Leaf::Comment(comment) => Ok(comment.render()),
        }
    }

    /// The rule, if this leaf is one.
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Leaf::Rule(rule) => Some(rule),
            Leaf::Comment(_) => None,
        }
    }

    /// The comment, if this leaf is one.
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Leaf::Comment(comment) => Some(comment),
            Leaf::Rule(_) => None,
        }
    }
}

/// A child slot's content.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// A nested scope.
    Node(Node),
    /// A rule or comment.
    Leaf(Leaf),
}

impl Child {
    /// The node, if this child is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Child::Node(node) => Some(node),
            Child::Leaf(_) => None,
        }
    }

    /// The leaf, if this child is one.
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Child::Leaf(leaf) => Some(leaf),
            Child::Node(_) => None,
        }
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Leaf> for Child {
    fn from(leaf: Leaf) -> Self {
        Child::Leaf(leaf)
    }
}

impl From<Rule> for Child {
    fn from(rule: Rule) -> Self {
        Child::Leaf(Leaf::Rule(rule))
    }
}

impl From<Comment> for Child {
    fn from(comment: Comment) -> Self {
        Child::Leaf(Leaf::Comment(comment))
    }
}

/// A composite tree node with ordered children.
///
/// Children live in slots. Assigning past the end with [`set`](Self::set)
/// fills the gap with empty slots, which are never rendered and are skipped
/// by every accessor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    scope: Option<SelectorItem>,
    children: Vec<Option<Child>>,
}

impl Node {
    /// Create a root node (no selector scope).
    pub fn root() -> Self {
        Self::default()
    }

    /// Create a node scoping its descendants under `selector`.
    pub fn scoped(selector: impl Into<SelectorItem>) -> Self {
        Self {
            scope: Some(selector.into()),
            children: Vec::new(),
        }
    }

    /// The scope selector, or `None` for a root.
    pub fn scope_selector(&self) -> Option<&SelectorItem> {
        self.scope.as_ref()
    }

    /// Check if this node has no scope selector.
    pub fn is_root(&self) -> bool {
        self.scope.is_none()
    }

    /// Append a child, returning the node for chaining.
    pub fn append(&mut self, child: impl Into<Child>) -> &mut Self {
        self.children.push(Some(child.into()));
        self
    }

    /// Place a child at `index`, padding with empty slots if needed.
    pub fn set(&mut self, index: usize, child: impl Into<Child>) -> &mut Self {
        if index >= self.children.len() {
            self.children.resize_with(index + 1, || None);
        }
        self.children[index] = Some(child.into());
        self
    }

    /// The child at `index`; `None` for empty or out-of-range slots.
    pub fn get(&self, index: usize) -> Option<&Child> {
        self.children.get(index).and_then(Option::as_ref)
    }

    /// Mutable access to the child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Child> {
        self.children.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterate over occupied slots in order.
    pub fn children(&self) -> impl Iterator<Item = &Child> {
        self.children.iter().flatten()
    }

    /// Direct children that are nodes, in order.
    pub fn child_nodes(&self) -> Vec<&Node> {
        self.children().filter_map(Child::as_node).collect()
    }

    /// Every leaf reachable from this node, in pre-order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    /// Every rule reachable from this node, in pre-order.
    pub fn rules(&self) -> Vec<&Rule> {
        self.leaves().into_iter().filter_map(Leaf::as_rule).collect()
    }

    /// Every comment reachable from this node, in pre-order.
    pub fn comments(&self) -> Vec<&Comment> {
        self.leaves().into_iter().filter_map(Leaf::as_comment).collect()
    }

    /// Render this subtree.
    ///
    /// The node's own scope is appended to `inherited_scope` with a single
    /// space (either may be empty). Children render under the combined scope
    /// and are joined by newlines. Nested nodes that render nothing add no
    /// line.
    pub fn render(&self, symbols: &SymbolTable, inherited_scope: &str) -> Result<String> {
        let scope = self.compose_scope(symbols, inherited_scope)?;
        tracing::trace!(target: targets::RENDER, scope = %scope, slots = self.children.len(), "rendering node");

        let mut parts = Vec::with_capacity(self.children.len());
        for child in self.children() {
            match child {
                Child::Node(node) => {
                    let rendered = node.render(symbols, &scope)?;
                    if !rendered.is_empty() {
                        parts.push(rendered);
                    }
                }
                Child::Leaf(leaf) => parts.push(leaf.render(symbols, &scope)?),
            }
        }

        Ok(parts.join("\n"))
    }

    /// Render with an empty symbol table from the top.
    pub fn to_css(&self) -> Result<String> {
        self.render(&SymbolTable::new(), "")
    }

    fn compose_scope(&self, symbols: &SymbolTable, inherited: &str) -> Result<String> {
        let own = match &self.scope {
            Some(selector) => selector.resolve(symbols)?.as_str().to_string(),
            None => String::new(),
        };

        Ok(match (inherited.is_empty(), own.is_empty()) {
            (false, false) => format!("{inherited} {own}"),
            (false, true) => inherited.to_string(),
            (true, _) => own,
        })
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        for child in self.children() {
            match child {
                Child::Leaf(leaf) => out.push(leaf),
                Child::Node(node) => node.collect_leaves(out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::Declaration;
    use crate::selector::Selector;
    use crate::types::{Symbol, Value};
    use crate::variable::Variable;
    use crate::Error;

    fn rule() -> Rule {
        Rule::new([Selector::new("p")], [Declaration::new("font-weight", "bold")])
    }

    fn comment() -> Comment {
        Comment::new("Comment header").metadata("author", "Some Body")
    }

    #[test]
    fn appending() {
        let mut node = Node::scoped(Selector::new(".test"));
        node.append(rule());
        let mut tree = Node::root();
        tree.append(node.clone());

        assert_eq!(tree.get(0), Some(&Child::Node(node)));
        assert_eq!(
            tree.child_nodes()[0].get(0),
            Some(&Child::Leaf(Leaf::Rule(rule())))
        );
    }

    #[test]
    fn setting_pads_with_empty_slots() {
        let mut tree = Node::root();
        tree.set(1, Node::scoped(".test"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(0), None);
        assert!(matches!(tree.get(1), Some(Child::Node(_))));

        tree.set(1, rule());
        assert!(matches!(tree.get(1), Some(Child::Leaf(Leaf::Rule(_)))));

        tree.set(5, comment());
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.children().count(), 2);
        assert_eq!(tree.leaves().len(), 2);
        assert_eq!(tree.to_css().unwrap(), "p {font-weight:bold;}\n/**\n * Comment header\n *\n * @author Some Body\n */");
    }

    #[test]
    fn rules_collation() {
        let mut node = Node::scoped(".test");
        node.append(rule()).append(rule()).append(comment());
        let mut tree = Node::root();
        tree.append(node.clone()).append(node);

        assert_eq!(tree.leaves().len(), 6);
        assert_eq!(tree.rules().len(), 4);
        assert_eq!(tree.comments().len(), 2);
    }

    #[test]
    fn node_reader_excludes_leaves() {
        let mut tree = Node::root();
        tree.append(Node::scoped(".test")).append(rule());

        assert_eq!(tree.child_nodes().len(), 1);
        assert_eq!(tree.children().count(), 2);
    }

    #[test]
    fn selector_serialisation() {
        let mut node = Node::scoped(".test");
        node.append(rule());
        let mut onde = Node::scoped(".parent > .child");
        onde.append(rule());

        let mut tree = Node::root();
        tree.append(node).append(onde);

        assert_eq!(
            tree.to_css().unwrap(),
            ".test p {font-weight:bold;}\n.parent > .child p {font-weight:bold;}"
        );
    }

    #[test]
    fn scopes_compose_two_deep() {
        let mut inner = Node::scoped("B");
        inner.append(rule());
        let mut outer = Node::scoped("A");
        outer.append(inner);
        let mut tree = Node::root();
        tree.append(outer);

        assert_eq!(tree.to_css().unwrap(), "A B p {font-weight:bold;}");
    }

    #[test]
    fn subtree_render_is_independent_of_ancestors() {
        let mut inner = Node::scoped("B");
        inner.append(rule());
        assert_eq!(inner.to_css().unwrap(), "B p {font-weight:bold;}");
        assert_eq!(inner.render(&SymbolTable::new(), "X").unwrap(), "X B p {font-weight:bold;}");
    }

    #[test]
    fn flattening_is_preorder() {
        let mut inner = Node::scoped("B");
        inner.append(rule());
        let mut outer = Node::scoped("A");
        outer.append(inner);
        let mut tree = Node::root();
        tree.append(outer).append(comment());

        let leaves = tree.leaves();
        assert_eq!(leaves.len(), 2);
        assert!(matches!(leaves[0], Leaf::Rule(_)));
        assert!(matches!(leaves[1], Leaf::Comment(_)));
        assert_eq!(tree.rules().len(), 1);
        assert_eq!(tree.comments().len(), 1);
    }

    #[test]
    fn empty_nested_nodes_add_no_lines() {
        let mut tree = Node::root();
        tree.append(rule()).append(Node::scoped(".empty")).append(rule());
        assert_eq!(tree.to_css().unwrap(), "p {font-weight:bold;}\np {font-weight:bold;}");
    }

    #[test]
    fn variable_scope_and_values() {
        let mut scope = Node::scoped(Variable::selector("region"));
        scope.append(Rule::new(
            ["a"],
            [Declaration::new("color", Value::from(Symbol::new("link")))],
        ));
        let mut tree = Node::root();
        tree.append(scope);

        let err = tree.to_css().unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { ref name } if name == "region"));

        let symbols = SymbolTable::new().with("region", "#sidebar").with("link", "#00f");
        let first = tree.render(&symbols, "").unwrap();
        assert_eq!(first, "#sidebar a {color:#00f;}");
        assert_eq!(tree.render(&symbols, "").unwrap(), first);

        let other = SymbolTable::new().with("region", "#footer").with("link", "#999");
        assert_eq!(tree.render(&other, "").unwrap(), "#footer a {color:#999;}");
    }
}
