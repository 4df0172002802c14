//! Component model: trait, slots, registry.

pub mod registry;
pub mod slots;
pub mod traits;

pub use registry::{Attrs, Registry, RenderError};
pub use slots::Slots;
pub use traits::{Component, ContentModel, RenderContext};
