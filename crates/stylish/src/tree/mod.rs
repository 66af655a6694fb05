//! Selector trees.

mod node;

pub use node::{Child, Leaf, Node};
