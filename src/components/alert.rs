//! Alert component: contextual feedback messages.
//!
//! Supports the Tabler variants (success, info, warning, danger, or any
//! color), an optional title, a default icon per variant, dismissible and
//! important styles, and an optional trailing link. Body content comes from
//! the "body" slot when filled, otherwise from the `message` attribute.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::assets::ERROR_ICON;
use crate::component::{Component, RenderContext};
use crate::html::{ClassList, Element, Node};

// ---------------------------------------------------------------------------
// IconMode
// ---------------------------------------------------------------------------

/// How the alert picks its icon.
///
/// Deserializes from the attribute forms callers pass: `false` hides the
/// icon, a string names one, anything else keeps the per-variant default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IconMode {
    /// Use the default icon for the variant, if it has one.
    #[default]
    Auto,
    /// Render no icon.
    Hidden,
    /// Render this icon regardless of variant.
    Named(String),
}

impl<'de> Deserialize<'de> for IconMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Bool(false) => Ok(IconMode::Hidden),
            Value::Bool(true) | Value::Null => Ok(IconMode::Auto),
            Value::String(name) => Ok(IconMode::Named(name)),
            other => Err(serde::de::Error::custom(format!(
                "icon must be false or a string, got {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Alert
// ---------------------------------------------------------------------------

/// A contextual feedback message.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Alert;
///
/// let alert = Alert::new()
///     .variant("success")
///     .message("Your changes have been saved!");
/// assert_eq!(alert.alert_classes(), "alert alert-success");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Alert {
    #[serde(default = "default_variant")]
    variant: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    icon: IconMode,
    #[serde(default)]
    dismissible: bool,
    #[serde(default)]
    important: bool,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    link_text: Option<String>,
    #[serde(default)]
    custom_class: Option<String>,
}

fn default_variant() -> String {
    "info".to_owned()
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            title: None,
            message: None,
            icon: IconMode::Auto,
            dismissible: false,
            important: false,
            link: None,
            link_text: None,
            custom_class: None,
        }
    }
}

impl Alert {
    /// An info alert with no content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color variant (success, info, warning, danger, or any
    /// Tabler color).
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Set the alert title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message text (escaped on render).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Use a specific icon instead of the variant default.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = IconMode::Named(icon.into());
        self
    }

    /// Render no icon.
    pub fn hide_icon(mut self) -> Self {
        self.icon = IconMode::Hidden;
        self
    }

    /// Whether the alert can be dismissed.
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    /// Use the important style with a colored background.
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    /// Add a trailing link.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }

    /// Set the link text (default "Learn more").
    pub fn link_text(mut self, text: impl Into<String>) -> Self {
        self.link_text = Some(text.into());
        self
    }

    /// Additional CSS classes on the root element.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// The combined CSS classes for the root element.
    pub fn alert_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("alert");
        classes.push(format!("alert-{}", self.variant));
        classes.push_if(self.dismissible, "alert-dismissible");
        classes.push_if(self.important, "alert-important");
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }

    /// The icon to render, honoring the mode and the variant defaults.
    pub fn default_icon(&self) -> Option<&str> {
        match &self.icon {
            IconMode::Hidden => None,
            IconMode::Named(name) if !name.is_empty() => Some(name),
            IconMode::Named(_) => None,
            IconMode::Auto => match self.variant.as_str() {
                "success" => Some("check"),
                "info" => Some("info-circle"),
                "warning" => Some("alert-triangle"),
                "danger" => Some("alert-circle"),
                _ => None,
            },
        }
    }

    pub fn has_icon(&self) -> bool {
        self.default_icon().is_some()
    }

    fn effective_link_text(&self) -> &str {
        self.link_text.as_deref().unwrap_or("Learn more")
    }

    /// Title and body nodes, before any icon wrapping.
    fn content_nodes(&self, ctx: &RenderContext<'_>) -> Vec<Node> {
        let mut nodes = Vec::new();
        if let Some(title) = &self.title {
            nodes.push(Element::new("h4").class("alert-title").text(title).into());
        }

        let mut body = Element::new("div").class("text-secondary");
        let mut filled = false;
        if let Some(slot) = ctx.body() {
            body = body.raw(slot.as_str());
            filled = true;
        } else if let Some(message) = &self.message {
            body = body.text(message);
            filled = true;
        }
        if let Some(url) = &self.link {
            if filled {
                body = body.text(" ");
            }
            body = body.child(
                Element::new("a")
                    .attr("href", url)
                    .class("alert-link")
                    .text(self.effective_link_text()),
            );
            filled = true;
        }
        if filled {
            nodes.push(body.into());
        }
        nodes
    }
}

impl Component for Alert {
    fn component_type(&self) -> &str {
        "alert"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let mut root = Element::new("div")
            .class(self.alert_classes())
            .attr("role", "alert");

        let content = self.content_nodes(ctx);
        match self.default_icon() {
            Some(name) => {
                let svg = ctx
                    .assets
                    .icon_svg(name, false)
                    .unwrap_or_else(|| ERROR_ICON.to_owned());
                root = root.child(
                    Element::new("div")
                        .class("d-flex")
                        .child(Element::new("span").class("alert-icon").raw(svg))
                        .child(Element::new("div").children(content)),
                );
            }
            None => root = root.children(content),
        }

        if self.dismissible {
            let mut close = ClassList::new();
            close.push("btn-close");
            close.push_if(self.important, "btn-close-white");
            root = root.child(
                Element::new("a")
                    .class(close.to_string())
                    .attr("data-bs-dismiss", "alert")
                    .attr("aria-label", "close"),
            );
        }

        root.into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
