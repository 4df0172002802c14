//! Markup tree: elements, text, raw fragments, class lists, escaping.
//!
//! Everything the catalog renders goes through [`Node`]. Plain text is
//! escaped at serialization time; [`Html`] wraps already-rendered markup
//! that must pass through verbatim (slot content, captured fragments).

pub mod classes;
pub mod escape;
pub mod node;

pub use classes::ClassList;
pub use escape::escape;
pub use node::{Element, Html, Node};
