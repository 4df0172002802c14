//! Status component: colored status badges, dots, and indicators.

use serde::{Deserialize, Deserializer};

use crate::component::{Component, RenderContext};
use crate::html::{ClassList, Element, Node};

/// The Tabler color palette accepted by status components.
pub const COLORS: [&str; 12] = [
    "blue", "azure", "indigo", "purple", "pink", "red", "orange", "yellow", "lime", "green",
    "teal", "cyan",
];

fn validate_color(color: &str) -> String {
    if COLORS.contains(&color) {
        color.to_owned()
    } else {
        "blue".to_owned()
    }
}

fn default_color() -> String {
    "blue".to_owned()
}

fn de_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let color = String::deserialize(deserializer)?;
    Ok(validate_color(&color))
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// A status badge, dot, or indicator.
///
/// Three mutually exclusive shapes: the default text badge (optionally with
/// a leading dot), a standalone dot, and the three-circle indicator.
/// Unknown colors fall back to blue.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Status;
///
/// let status = Status::new("Online").color("green").dot(true).animated(true);
/// assert_eq!(status.status_classes(), "status status-green");
/// assert_eq!(status.dot_classes(), "status-dot status-dot-animated");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Status {
    #[serde(default)]
    text: Option<String>,
    #[serde(default = "default_color", deserialize_with = "de_color")]
    color: String,
    #[serde(default)]
    dot: bool,
    #[serde(default)]
    animated: bool,
    #[serde(default)]
    lite: bool,
    #[serde(default)]
    standalone: bool,
    #[serde(default)]
    indicator: bool,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            text: None,
            color: default_color(),
            dot: false,
            animated: false,
            lite: false,
            standalone: false,
            indicator: false,
        }
    }
}

impl Status {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A status with no text, for standalone dots and indicators.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Set the color; unknown names fall back to blue.
    pub fn color(mut self, color: impl AsRef<str>) -> Self {
        self.color = validate_color(color.as_ref());
        self
    }

    /// Show a leading dot before the text.
    pub fn dot(mut self, dot: bool) -> Self {
        self.dot = dot;
        self
    }

    /// Animate the dot or indicator.
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Use the lite (less prominent) style.
    pub fn lite(mut self, lite: bool) -> Self {
        self.lite = lite;
        self
    }

    /// Render as a standalone dot, no text.
    pub fn standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Render as a three-circle indicator.
    pub fn indicator(mut self, indicator: bool) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.trim().is_empty())
    }

    /// Whether a leading dot renders inside the text badge.
    pub fn with_dot(&self) -> bool {
        self.dot && !self.standalone && !self.indicator
    }

    /// Classes for the outer status element.
    pub fn status_classes(&self) -> String {
        let mut classes = ClassList::new();
        if self.indicator {
            classes.push("status-indicator");
            classes.push_if(self.animated, "status-indicator-animated");
            classes.push(format!("status-{}", self.color));
        } else if self.standalone {
            classes.push("status-dot");
            classes.push_if(self.animated, "status-dot-animated");
            classes.push(format!("status-{}", self.color));
        } else {
            classes.push("status");
            classes.push(format!("status-{}", self.color));
            classes.push_if(self.lite, "status-lite");
        }
        classes.to_string()
    }

    /// Classes for the dot inside a text badge.
    pub fn dot_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("status-dot");
        classes.push_if(self.animated, "status-dot-animated");
        classes.to_string()
    }
}

impl Component for Status {
    fn component_type(&self) -> &str {
        "status"
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        let mut root = Element::new("span").class(self.status_classes());

        if self.indicator {
            for _ in 0..3 {
                root = root.child(Element::new("span").class("status-indicator-circle"));
            }
        } else if !self.standalone {
            if self.with_dot() {
                root = root.child(Element::new("span").class(self.dot_classes()));
            }
            if let Some(text) = &self.text {
                root = root.text(text);
            }
        }

        root.into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
