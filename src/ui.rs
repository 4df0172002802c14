//! Ui struct: registry plus assets, the crate's front door.
//!
//! [`Ui`] bundles a component [`Registry`] with an [`AssetStore`] so
//! callers hold one value: render by name from attribute maps, or render
//! typed components directly. Template-engine integrations typically keep
//! one `Ui` for the life of the process.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use crate::assets::AssetStore;
use crate::component::{Attrs, Component, Registry, RenderContext, RenderError, Slots};
use crate::html::Html;

/// The component catalog bound to an asset store.
///
/// # Examples
///
/// ```
/// use tabler_kit::ui::Ui;
///
/// let ui = Ui::new();
/// let html = ui.render("status", serde_json::Map::new()).unwrap();
/// assert!(html.as_str().contains("status"));
/// ```
#[derive(Debug, Default)]
pub struct Ui {
    registry: Registry,
    assets: AssetStore,
}

impl Ui {
    /// The full built-in catalog over the bundled assets.
    pub fn new() -> Self {
        Self {
            registry: Registry::with_builtins(),
            assets: AssetStore::new(),
        }
    }

    /// The full catalog, with a filesystem directory consulted for assets
    /// the bundle doesn't carry.
    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            registry: Registry::with_builtins(),
            assets: AssetStore::with_root(root),
        }
    }

    /// Register an additional component type under `name`.
    pub fn register<C>(&mut self, name: impl Into<String>)
    where
        C: Component + DeserializeOwned + 'static,
    {
        self.registry.register::<C>(name);
    }

    /// Render a registered component from an attribute map.
    pub fn render(&self, name: &str, attrs: Attrs) -> Result<Html, RenderError> {
        self.registry.render(name, attrs, &Slots::new(), &self.assets)
    }

    /// Render a registered component with slot content.
    pub fn render_with_slots(
        &self,
        name: &str,
        attrs: Attrs,
        slots: &Slots,
    ) -> Result<Html, RenderError> {
        self.registry.render(name, attrs, slots, &self.assets)
    }

    /// Render a typed component directly.
    pub fn component(&self, component: &dyn Component) -> Html {
        self.component_with_slots(component, &Slots::new())
    }

    /// Render a typed component with slot content.
    pub fn component_with_slots(&self, component: &dyn Component, slots: &Slots) -> Html {
        let ctx = RenderContext::new(&self.assets, slots);
        Html::from_node(&component.render(&ctx))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }
}

// ===========================================================================
// Tests
// ===========================================================================
