//! Dark mode toggle: a nav-link button cycling the color scheme.
//!
//! Renders a moon and a sun icon inside one anchor; the Tabler theme CSS
//! shows whichever matches the active scheme (`hide-theme-dark` /
//! `hide-theme-light`), and the Stimulus controller wired through the data
//! attributes flips the theme on click.

use serde::Deserialize;

use crate::assets::{svg, ERROR_ICON};
use crate::component::{Component, RenderContext};
use crate::html::{ClassList, Element, Node};

/// A dark/light scheme toggle button.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::DarkModeToggle;
///
/// let toggle = DarkModeToggle::new().size("lg");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DarkModeToggle {
    #[serde(default)]
    size: Option<String>,
    #[serde(rename = "class", default)]
    custom_class: Option<String>,
}

impl DarkModeToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Icon size preset, "sm" or "lg".
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Additional classes on the anchor.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Icon width in pixels for the configured size.
    pub fn icon_size(&self) -> u32 {
        match self.size.as_deref() {
            Some("sm") => 16,
            Some("lg") => 32,
            _ => 24,
        }
    }

    fn css_classes(&self) -> ClassList {
        let mut classes = ClassList::new();
        classes.push("nav-link");
        classes.push("px-0");
        classes.push_opt(self.custom_class.as_deref());
        classes
    }

    fn themed_icon(&self, ctx: &RenderContext<'_>, name: &str, theme_class: &str) -> String {
        let raw = ctx
            .assets
            .icon_svg(name, false)
            .unwrap_or_else(|| ERROR_ICON.to_owned());
        let classed = svg::append_classes(&raw, &[theme_class]);
        svg::resize_to_width(&classed, self.icon_size())
    }
}

impl Component for DarkModeToggle {
    fn component_type(&self) -> &str {
        "dark_mode_toggle"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        Element::new("a")
            .attr("href", "#")
            .attr("class", self.css_classes().to_string())
            .attr("data-controller", "tabler-ui--dark-mode")
            .attr("data-action", "tabler-ui--dark-mode#toggle")
            .attr("aria-label", "Toggle dark mode")
            .raw(self.themed_icon(ctx, "moon", "hide-theme-dark"))
            .raw(self.themed_icon(ctx, "sun", "hide-theme-light"))
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
