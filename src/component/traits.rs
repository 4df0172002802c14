//! Component trait: type name, content model, render.
//!
//! The `Component` trait is the core abstraction for every catalog entry in
//! tabler-kit. A component knows its type name, whether it accepts slot
//! content, and how to render itself into an HTML [`Node`] given a
//! [`RenderContext`]. Components carry their configuration as plain struct
//! fields, so they deserialize from attribute maps and register as factories
//! in the [`Registry`](crate::component::Registry).

use crate::assets::AssetStore;
use crate::component::slots::Slots;
use crate::html::{Html, Node};

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all components in tabler-kit.
///
/// Component is object-safe: rendering takes `&self` and returns an owned
/// [`Node`] tree, so boxed components from the registry render the same way
/// as components constructed directly.
pub trait Component {
    /// The catalog name for this component type (e.g. "alert", "tabs").
    ///
    /// Matches the name the component registers under.
    fn component_type(&self) -> &str;

    /// How this component consumes caller-supplied content.
    ///
    /// Defaults to [`ContentModel::Slots`]. Components configured entirely
    /// through builder methods (tabs, navbar, dropdown, ...) override this
    /// so callers know slot content would be ignored.
    fn content_model(&self) -> ContentModel {
        ContentModel::Slots
    }

    /// Render this component into an HTML node tree.
    fn render(&self, ctx: &RenderContext<'_>) -> Node;
}

impl std::fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("component_type", &self.component_type())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// ContentModel
// ---------------------------------------------------------------------------

/// How a component type accepts caller content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentModel {
    /// Content arrives through named [`Slots`]; "body" is the conventional
    /// main slot.
    Slots,
    /// Structure is declared through builder methods before render; slot
    /// content is ignored.
    Builder,
}

// ---------------------------------------------------------------------------
// RenderContext
// ---------------------------------------------------------------------------

/// Everything a component can reach while rendering: the asset store for
/// SVG lookups and the slot content supplied by the caller.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub assets: &'a AssetStore,
    pub slots: &'a Slots,
}

impl<'a> RenderContext<'a> {
    pub fn new(assets: &'a AssetStore, slots: &'a Slots) -> Self {
        Self { assets, slots }
    }

    /// The named slot, if it holds non-blank content.
    pub fn slot(&self, name: &str) -> Option<&'a Html> {
        self.slots.filled(name)
    }

    /// The conventional "body" slot, if non-blank.
    pub fn body(&self) -> Option<&'a Html> {
        self.slots.body()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
