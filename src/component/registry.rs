//! Component registry: explicit name-to-factory dispatch.
//!
//! Every component type is registered under a snake_case name together with
//! a factory that deserializes an attribute map into the component struct.
//! Rendering by name looks the factory up, builds the component, and renders
//! it; unknown names and malformed attributes surface as [`RenderError`]
//! instead of silently rendering nothing.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

use crate::assets::AssetStore;
use crate::component::slots::Slots;
use crate::component::traits::{Component, ContentModel, RenderContext};
use crate::html::Html;

/// Attribute map handed to component factories, as parsed from JSON-shaped
/// caller input.
pub type Attrs = serde_json::Map<String, Value>;

type Factory = fn(Attrs) -> Result<Box<dyn Component>, serde_json::Error>;

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// Errors surfaced when building or rendering a component by name.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested name has no registered factory.
    #[error("unknown component type `{name}`")]
    UnknownComponent { name: String },

    /// The attribute map does not deserialize into the component struct.
    #[error("invalid attributes for component `{component}`: {source}")]
    InvalidAttrs {
        component: String,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Name-to-factory table for component types.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
}

impl Registry {
    /// An empty registry. Most callers want [`with_builtins`](Self::with_builtins).
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the full component catalog.
    pub fn with_builtins() -> Self {
        use crate::components::*;

        let mut registry = Self::new();
        registry.register::<Alert>("alert");
        registry.register::<Tabs>("tabs");
        registry.register::<Dropdown>("dropdown");
        registry.register::<Navbar>("navbar");
        registry.register::<Rating>("rating");
        registry.register::<Placeholder>("placeholder");
        registry.register::<Status>("status");
        registry.register::<SettingsPage>("settings_page");
        registry.register::<Icon>("icon");
        registry.register::<Illustration>("illustration");
        registry.register::<DarkModeToggle>("dark_mode_toggle");
        registry.register::<Datagrid>("datagrid");
        registry
    }

    /// Register a component type under `name`, replacing any previous entry.
    ///
    /// The type's [`Deserialize`](serde::Deserialize) impl defines which
    /// attributes it accepts and their defaults.
    pub fn register<C>(&mut self, name: impl Into<String>)
    where
        C: Component + DeserializeOwned + 'static,
    {
        fn build<C>(attrs: Attrs) -> Result<Box<dyn Component>, serde_json::Error>
        where
            C: Component + DeserializeOwned + 'static,
        {
            let component: C = serde_json::from_value(Value::Object(attrs))?;
            Ok(Box::new(component))
        }

        self.factories.insert(name.into(), build::<C>);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build a component from its name and attribute map.
    pub fn build(&self, name: &str, attrs: Attrs) -> Result<Box<dyn Component>, RenderError> {
        trace!(name, "looking up component");
        let Some(factory) = self.factories.get(name) else {
            debug!(name, "component not registered");
            return Err(RenderError::UnknownComponent {
                name: name.to_owned(),
            });
        };
        factory(attrs).map_err(|source| RenderError::InvalidAttrs {
            component: name.to_owned(),
            source,
        })
    }

    /// Build and render a component in one step.
    ///
    /// Builder-model components take their structure from attributes alone;
    /// slot content passed to them is ignored with a debug note.
    pub fn render(
        &self,
        name: &str,
        attrs: Attrs,
        slots: &Slots,
        assets: &AssetStore,
    ) -> Result<Html, RenderError> {
        let component = self.build(name, attrs)?;
        if component.content_model() == ContentModel::Builder && !slots.is_empty() {
            debug!(name, "builder component ignores slot content");
        }
        let ctx = RenderContext::new(assets, slots);
        Ok(Html::from_node(&component.render(&ctx)))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::Node;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Badge {
        label: String,
        #[serde(default)]
        color: Option<String>,
    }

    impl Component for Badge {
        fn component_type(&self) -> &str {
            "badge"
        }

        fn render(&self, _ctx: &RenderContext<'_>) -> Node {
            let color = self.color.as_deref().unwrap_or("secondary");
            crate::html::Element::new("span")
                .class(format!("badge bg-{color}"))
                .text(&self.label)
                .into()
        }
    }

    fn attrs(json: serde_json::Value) -> Attrs {
        match json {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    // ── registration and lookup ──────────────────────────────────────

    #[test]
    fn register_and_build() {
        let mut registry = Registry::new();
        registry.register::<Badge>("badge");
        assert!(registry.contains("badge"));

        let component = registry
            .build("badge", attrs(serde_json::json!({"label": "New"})))
            .unwrap();
        assert_eq!(component.component_type(), "badge");
    }

    #[test]
    fn unknown_name_errors() {
        let registry = Registry::new();
        let err = registry.build("badge", Attrs::new()).unwrap_err();
        assert!(matches!(err, RenderError::UnknownComponent { ref name } if name == "badge"));
        assert_eq!(err.to_string(), "unknown component type `badge`");
    }

    #[test]
    fn invalid_attrs_error_names_the_component() {
        let mut registry = Registry::new();
        registry.register::<Badge>("badge");

        // `label` is required
        let err = registry.build("badge", Attrs::new()).unwrap_err();
        match err {
            RenderError::InvalidAttrs { component, .. } => assert_eq!(component, "badge"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_produces_html() {
        let mut registry = Registry::new();
        registry.register::<Badge>("badge");

        let html = registry
            .render(
                "badge",
                attrs(serde_json::json!({"label": "Hi", "color": "red"})),
                &Slots::new(),
                &AssetStore::new(),
            )
            .unwrap();
        assert_eq!(html.as_str(), r#"<span class="badge bg-red">Hi</span>"#);
    }

    // ── builtins ─────────────────────────────────────────────────────

    #[test]
    fn builtins_cover_the_catalog() {
        let registry = Registry::with_builtins();
        for name in [
            "alert",
            "tabs",
            "dropdown",
            "navbar",
            "rating",
            "placeholder",
            "status",
            "settings_page",
            "icon",
            "illustration",
            "dark_mode_toggle",
            "datagrid",
        ] {
            assert!(registry.contains(name), "missing builtin: {name}");
        }
        assert_eq!(registry.names().len(), 12);
    }

    #[test]
    fn register_replaces_existing_entry() {
        #[derive(Debug, Deserialize)]
        struct Other {}

        impl Component for Other {
            fn component_type(&self) -> &str {
                "other"
            }

            fn render(&self, _ctx: &RenderContext<'_>) -> Node {
                Node::text("other")
            }
        }

        let mut registry = Registry::with_builtins();
        registry.register::<Other>("alert");
        let html = registry
            .render("alert", Attrs::new(), &Slots::new(), &AssetStore::new())
            .unwrap();
        assert_eq!(html.as_str(), "other");
    }
}
