//! Illustration component: themed SVG illustrations.
//!
//! Resolves `illustrations/{variant}/{name}.svg` from the asset store,
//! scales it to a named or pixel size via its viewBox, and appends custom
//! classes. An unresolvable name renders a generated error SVG naming the
//! missing illustration.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::assets::{error_illustration, svg};
use crate::component::{Component, RenderContext};
use crate::html::Node;

/// Named width presets.
const SIZES: [(&str, u32); 6] = [
    ("xs", 100),
    ("sm", 150),
    ("md", 200),
    ("lg", 300),
    ("xl", 400),
    ("xxl", 600),
];

// ---------------------------------------------------------------------------
// IllustrationSize
// ---------------------------------------------------------------------------

/// Target width: a named preset or explicit pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllustrationSize {
    Named(String),
    Pixels(u32),
}

impl IllustrationSize {
    /// The pixel width, if the size resolves.
    pub fn width(&self) -> Option<u32> {
        match self {
            IllustrationSize::Pixels(px) => Some(*px),
            IllustrationSize::Named(name) => SIZES
                .iter()
                .find(|(preset, _)| preset == name)
                .map(|(_, px)| *px),
        }
    }
}

impl From<u32> for IllustrationSize {
    fn from(px: u32) -> Self {
        IllustrationSize::Pixels(px)
    }
}

impl From<&str> for IllustrationSize {
    fn from(name: &str) -> Self {
        match name.parse::<u32>() {
            Ok(px) => IllustrationSize::Pixels(px),
            Err(_) => IllustrationSize::Named(name.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for IllustrationSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(IllustrationSize::from(s.as_str())),
            Value::Number(n) => n
                .as_u64()
                .map(|px| IllustrationSize::Pixels(px as u32))
                .ok_or_else(|| serde::de::Error::custom("size must be a positive integer")),
            other => Err(serde::de::Error::custom(format!(
                "size must be a name or pixel width, got {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Illustration
// ---------------------------------------------------------------------------

/// A themed SVG illustration.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Illustration;
///
/// let art = Illustration::new("not-found").variant("dark").size("lg");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Illustration {
    name: String,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    size: Option<IllustrationSize>,
    #[serde(rename = "class", default)]
    custom_class: Option<String>,
}

impl Illustration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: None,
            size: None,
            custom_class: None,
        }
    }

    /// Theme variant directory (default "light").
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Target width: a preset name ("xs" through "xxl") or pixels.
    pub fn size(mut self, size: impl Into<IllustrationSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Additional classes on the SVG root.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    fn variant_or_default(&self) -> &str {
        self.variant.as_deref().unwrap_or("light")
    }
}

impl Component for Illustration {
    fn component_type(&self) -> &str {
        "illustration"
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        if self.name.trim().is_empty() {
            return Node::raw(error_illustration(None));
        }

        let Some(mut data) = ctx
            .assets
            .illustration_svg(&self.name, self.variant_or_default())
        else {
            return Node::raw(error_illustration(Some(&self.name)));
        };

        if let Some(size) = &self.size {
            match size.width() {
                Some(width) => data = svg::resize_to_width(&data, width),
                None => debug!(?size, "unknown illustration size, not resizing"),
            }
        }
        if let Some(class) = self.custom_class.as_deref().filter(|c| !c.is_empty()) {
            data = svg::ensure_class(&data, class);
        }

        Node::raw(data)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
