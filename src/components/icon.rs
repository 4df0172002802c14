//! Icon component: inline Tabler SVG icons.
//!
//! Resolves the named SVG from the asset store and injects animation,
//! size, and custom classes into its class attribute. A blank or
//! unresolvable name renders the bundled error glyph so the gap is visible
//! instead of silent.

use serde::Deserialize;

use crate::assets::{svg, ERROR_ICON};
use crate::component::{Component, RenderContext};
use crate::html::{Element, Node};

/// An inline SVG icon.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Icon;
///
/// let icon = Icon::new("check").color("success").size("lg");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Icon {
    icon: String,
    #[serde(default)]
    filled: bool,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    pulse: bool,
    #[serde(default)]
    tada: bool,
    #[serde(default)]
    rotate: bool,
    #[serde(default)]
    size: Option<String>,
    #[serde(rename = "class", default)]
    custom_class: Option<String>,
}

impl Icon {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            filled: false,
            color: None,
            pulse: false,
            tada: false,
            rotate: false,
            size: None,
            custom_class: None,
        }
    }

    /// Use the filled icon set instead of outline.
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Wrap the icon in a `text-{color}` span.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Add the pulse animation class.
    pub fn pulse(mut self, pulse: bool) -> Self {
        self.pulse = pulse;
        self
    }

    /// Add the tada animation class.
    pub fn tada(mut self, tada: bool) -> Self {
        self.tada = tada;
        self
    }

    /// Add the rotate animation class.
    pub fn rotate(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Add an `icon-{size}` class (e.g. "sm", "lg").
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Additional classes injected into the SVG.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// The classes to inject, in a fixed order.
    fn extra_classes(&self) -> Vec<String> {
        let mut extra = Vec::new();
        if self.pulse {
            extra.push("icon-pulse".to_owned());
        }
        if self.tada {
            extra.push("icon-tada".to_owned());
        }
        if self.rotate {
            extra.push("icon-rotate".to_owned());
        }
        if let Some(size) = self.size.as_deref().filter(|s| !s.is_empty()) {
            extra.push(format!("icon-{size}"));
        }
        if let Some(class) = self.custom_class.as_deref().filter(|c| !c.is_empty()) {
            extra.push(class.to_owned());
        }
        extra
    }
}

impl Component for Icon {
    fn component_type(&self) -> &str {
        "icon"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        if self.icon.trim().is_empty() {
            return Node::raw(ERROR_ICON);
        }

        let Some(data) = ctx.assets.icon_svg(&self.icon, self.filled) else {
            return Node::raw(ERROR_ICON);
        };

        let extra = self.extra_classes();
        let refs: Vec<&str> = extra.iter().map(String::as_str).collect();
        let data = svg::append_classes(&data, &refs);

        match self.color.as_deref().filter(|c| !c.is_empty()) {
            Some(color) => Element::new("span")
                .class(format!("text-{color}"))
                .raw(data)
                .into(),
            None => Node::raw(data),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_to_string;

    // ── resolution ───────────────────────────────────────────────────

    #[test]
    fn renders_bundled_outline_icon() {
        let html = render_to_string(&Icon::new("check"));
        assert!(html.starts_with("<svg"));
        assert!(html.contains("icon-tabler-check"));
    }

    #[test]
    fn filled_variant_uses_filled_set() {
        let html = render_to_string(&Icon::new("star").filled(true));
        assert!(html.contains("icon-tabler-star-filled"));
    }

    #[test]
    fn missing_icon_renders_error_glyph() {
        let html = render_to_string(&Icon::new("no-such-icon"));
        assert!(html.contains("icon-tabler-bug"));
        assert!(html.contains(r#"stroke="red""#));
    }

    #[test]
    fn blank_name_renders_error_glyph() {
        let html = render_to_string(&Icon::new("  "));
        assert!(html.contains("icon-tabler-bug"));
    }

    // ── class injection ──────────────────────────────────────────────

    #[test]
    fn animation_classes_inject_in_order() {
        let html = render_to_string(
            &Icon::new("check").pulse(true).tada(true).rotate(true).size("lg"),
        );
        assert!(html.contains("icon-tabler-check icon-pulse icon-tada icon-rotate icon-lg"));
    }

    #[test]
    fn custom_class_appends_last() {
        let html = render_to_string(&Icon::new("check").size("sm").custom_class("text-muted"));
        assert!(html.contains("icon-sm text-muted"));
    }

    // ── color wrapping ───────────────────────────────────────────────

    #[test]
    fn color_wraps_in_span() {
        let html = render_to_string(&Icon::new("check").color("success"));
        assert!(html.starts_with(r#"<span class="text-success"><svg"#));
        assert!(html.ends_with("</svg></span>"));
    }

    #[test]
    fn error_glyph_is_not_wrapped() {
        let html = render_to_string(&Icon::new("nope").color("danger"));
        assert!(html.starts_with("<svg"));
        assert!(!html.contains("text-danger"));
    }

    // ── deserialization ──────────────────────────────────────────────

    #[test]
    fn class_attr_maps_to_custom_class() {
        let icon: Icon = serde_json::from_value(serde_json::json!({
            "icon": "check",
            "class": "ms-1",
            "pulse": true,
        }))
        .unwrap();
        let html = render_to_string(&icon);
        assert!(html.contains("icon-pulse ms-1"));
    }

    #[test]
    fn icon_name_is_required() {
        let result: Result<Icon, _> = serde_json::from_value(serde_json::json!({}));
        assert!(result.is_err());
    }
}
