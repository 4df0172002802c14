//! Dropdown component: a button opening a menu of items.
//!
//! Menu entries are a tagged sum of links, dividers, and headers, so they
//! deserialize straight from attribute maps (`{"type": "item", ...}`) and
//! build up through the same builder methods the other components use.

use serde::Deserialize;

use crate::assets::{svg, ERROR_ICON};
use crate::component::{Component, ContentModel, RenderContext};
use crate::html::{ClassList, Element, Node};

fn default_url() -> String {
    "#".to_owned()
}

// ---------------------------------------------------------------------------
// Menu alignment
// ---------------------------------------------------------------------------

/// Which edge the menu aligns to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuAlign {
    #[default]
    Left,
    Right,
}

impl MenuAlign {
    fn from_name(name: &str) -> Self {
        match name {
            "right" => MenuAlign::Right,
            _ => MenuAlign::Left,
        }
    }
}

impl<'de> Deserialize<'de> for MenuAlign {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(MenuAlign::from_name(&name))
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A link entry in the menu.
#[derive(Debug, Clone, Deserialize)]
pub struct DropdownItem {
    title: String,
    #[serde(default = "default_url")]
    url: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    method: Option<String>,
}

impl DropdownItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: default_url(),
            icon: None,
            active: false,
            disabled: false,
            method: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Leading Tabler icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// HTTP method for the link, emitted as `data-turbo-method`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}

/// One entry in the dropdown menu.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropdownEntry {
    Item(DropdownItem),
    Divider,
    Header { title: String },
}

// ---------------------------------------------------------------------------
// Dropdown
// ---------------------------------------------------------------------------

/// A dropdown menu behind a button.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::{Dropdown, DropdownItem};
///
/// let menu = Dropdown::new("Actions")
///     .item(DropdownItem::new("Edit").url("/posts/1/edit"))
///     .divider()
///     .item(DropdownItem::new("Delete").url("/posts/1").method("delete"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dropdown {
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    button_variant: Option<String>,
    #[serde(default)]
    align: MenuAlign,
    #[serde(default)]
    items: Vec<DropdownEntry>,
}

impl Dropdown {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Button color variant (default "primary").
    pub fn button_variant(mut self, variant: impl Into<String>) -> Self {
        self.button_variant = Some(variant.into());
        self
    }

    pub fn align(mut self, align: MenuAlign) -> Self {
        self.align = align;
        self
    }

    pub fn item(mut self, item: DropdownItem) -> Self {
        self.items.push(DropdownEntry::Item(item));
        self
    }

    pub fn divider(mut self) -> Self {
        self.items.push(DropdownEntry::Divider);
        self
    }

    pub fn header(mut self, title: impl Into<String>) -> Self {
        self.items.push(DropdownEntry::Header {
            title: title.into(),
        });
        self
    }

    pub fn entry(mut self, entry: DropdownEntry) -> Self {
        self.items.push(entry);
        self
    }

    fn variant_or_default(&self) -> &str {
        self.button_variant.as_deref().unwrap_or("primary")
    }

    fn menu_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("dropdown-menu");
        classes.push_if(self.align == MenuAlign::Right, "dropdown-menu-end");
        classes.to_string()
    }

    fn entry_node(&self, entry: &DropdownEntry, ctx: &RenderContext<'_>) -> Node {
        match entry {
            DropdownEntry::Item(item) => {
                let mut classes = ClassList::new();
                classes.push("dropdown-item");
                classes.push_if(item.active, "active");
                classes.push_if(item.disabled, "disabled");

                let mut link = Element::new("a")
                    .class(classes.to_string())
                    .attr("href", &item.url)
                    .attr_opt("data-turbo-method", item.method.as_deref());
                if let Some(icon) = &item.icon {
                    let raw = ctx
                        .assets
                        .icon_svg(icon, false)
                        .unwrap_or_else(|| ERROR_ICON.to_owned());
                    link = link.raw(svg::append_classes(&raw, &["dropdown-item-icon"]));
                }
                link.text(&item.title).into()
            }
            DropdownEntry::Divider => Element::new("div").class("dropdown-divider").into(),
            DropdownEntry::Header { title } => {
                Element::new("span").class("dropdown-header").text(title).into()
            }
        }
    }
}

impl Component for Dropdown {
    fn component_type(&self) -> &str {
        "dropdown"
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Builder
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let mut button = Element::new("button")
            .class(format!("btn btn-{} dropdown-toggle", self.variant_or_default()))
            .attr("type", "button")
            .attr("data-bs-toggle", "dropdown")
            .attr("aria-expanded", "false");
        if let Some(label) = &self.label {
            button = button.text(label);
        }

        let mut menu = Element::new("div").class(self.menu_classes());
        for entry in &self.items {
            menu = menu.child(self.entry_node(entry, ctx));
        }

        Element::new("div")
            .class("dropdown")
            .child(button)
            .child(menu)
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
