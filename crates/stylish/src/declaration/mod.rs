//! Declarations, declaration groups and declaration lists.

mod background;
mod list;
mod property;

pub use background::{
    Background, ATTACHMENT_VALUES, HORIZONTAL_POSITIONS, PROPERTIES, REPEAT_VALUES,
    VERTICAL_POSITIONS,
};
pub use list::{DeclarationEntry, Declarations};
pub use property::{Declaration, Renderable};
