//! Test support: one-line component rendering and an in-memory form model.
//!
//! Used throughout this crate's own tests and exported for downstream
//! suites. [`render_to_string`] renders against the bundled assets with no
//! slot content; [`SampleModel`] is a [`FormModel`] whose types, values and
//! errors are set inline.

use std::collections::BTreeMap;

use crate::assets::AssetStore;
use crate::component::{Component, RenderContext, Slots};
use crate::form::{AttributeType, FormModel};

/// Render a component against the bundled assets and empty slots.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Status;
/// use tabler_kit::testing::render_to_string;
///
/// let html = render_to_string(&Status::new("Active"));
/// assert!(html.contains("status"));
/// ```
pub fn render_to_string(component: &dyn Component) -> String {
    render_with_slots(component, &Slots::new())
}

/// Render a component against the bundled assets with the given slots.
pub fn render_with_slots(component: &dyn Component, slots: &Slots) -> String {
    let assets = AssetStore::new();
    let ctx = RenderContext::new(&assets, slots);
    component.render(&ctx).to_html()
}

// ---------------------------------------------------------------------------
// SampleModel
// ---------------------------------------------------------------------------

/// An in-memory [`FormModel`] for form builder tests.
///
/// # Examples
///
/// ```
/// use tabler_kit::form::{AttributeType, FormModel};
/// use tabler_kit::testing::SampleModel;
///
/// let model = SampleModel::new("user")
///     .typed("admin", AttributeType::Boolean)
///     .value("name", "Ada")
///     .error("name", "is taken");
/// assert_eq!(model.attribute_value("name").as_deref(), Some("Ada"));
/// assert!(model.has_errors("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SampleModel {
    name: String,
    types: BTreeMap<String, AttributeType>,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, Vec<String>>,
}

impl SampleModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Declare an attribute's type.
    pub fn typed(mut self, attribute: impl Into<String>, attribute_type: AttributeType) -> Self {
        self.types.insert(attribute.into(), attribute_type);
        self
    }

    /// Set an attribute's current value.
    pub fn value(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(attribute.into(), value.into());
        self
    }

    /// Append a validation error to an attribute.
    pub fn error(mut self, attribute: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors
            .entry(attribute.into())
            .or_default()
            .push(message.into());
        self
    }
}

impl FormModel for SampleModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    fn attribute_type(&self, attribute: &str) -> AttributeType {
        self.types.get(attribute).copied().unwrap_or_default()
    }

    fn attribute_value(&self, attribute: &str) -> Option<String> {
        self.values.get(attribute).cloned()
    }

    fn errors_on(&self, attribute: &str) -> Vec<String> {
        self.errors.get(attribute).cloned().unwrap_or_default()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sample_model_reports_what_was_set() {
        let model = SampleModel::new("post")
            .typed("body", AttributeType::Text)
            .value("title", "Hello")
            .error("title", "too short")
            .error("title", "too plain");
        assert_eq!(model.model_name(), "post");
        assert_eq!(model.attribute_type("body"), AttributeType::Text);
        assert_eq!(model.attribute_type("title"), AttributeType::String);
        assert_eq!(model.attribute_value("title").as_deref(), Some("Hello"));
        assert_eq!(model.errors_on("title").len(), 2);
        assert!(!model.has_errors("body"));
    }

    #[test]
    fn render_helpers_produce_markup() {
        use crate::components::Alert;

        let bare = render_to_string(&Alert::new().message("hi"));
        assert!(bare.contains("alert"));

        let slots = Slots::new().with_body("<p>slotted</p>");
        let slotted = render_with_slots(&Alert::new(), &slots);
        assert!(slotted.contains("<p>slotted</p>"));
    }
}
