//! Tree leaves: rules and comments.

mod comment;
mod rule;

pub use comment::Comment;
pub use rule::Rule;
