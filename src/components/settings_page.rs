//! SettingsPage component: sidebar navigation plus content panels.
//!
//! Follows the same id and active-flag rules as tabs: item ids derive from
//! the container id (`{id}-item-{n}`, 1-based) and the first item is active
//! unless one says otherwise.

use serde::Deserialize;

use crate::assets::{svg, ERROR_ICON};
use crate::component::{Component, ContentModel, RenderContext};
use crate::html::{ClassList, Element, Html, Node};

// ---------------------------------------------------------------------------
// SettingsItem
// ---------------------------------------------------------------------------

/// One sidebar entry and its content panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsItem {
    id: String,
    title: String,
    icon: Option<String>,
    active: Option<bool>,
    content: Option<Html>,
}

impl SettingsItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Leading Tabler icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Explicitly mark this item active or inactive.
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Panel content for this item.
    pub fn content(mut self, content: impl Into<Html>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The assigned panel id (empty until added to a [`SettingsPage`]).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// SettingsPage
// ---------------------------------------------------------------------------

/// A settings page: sidebar list on the left, tab panels on the right.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::{SettingsItem, SettingsPage};
///
/// let page = SettingsPage::new("prefs")
///     .item(SettingsItem::new("General").icon("settings").content("<p>General</p>"))
///     .item(SettingsItem::new("Security"));
/// assert!(page.any());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsPage {
    id: String,
    #[serde(default = "default_title")]
    title: String,
    #[serde(skip)]
    items: Vec<SettingsItem>,
}

fn default_title() -> String {
    "Settings".to_owned()
}

impl SettingsPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: default_title(),
            items: Vec::new(),
        }
    }

    /// Title above the sidebar navigation (default "Settings").
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add an item. Assigns the panel id and resolves the active flag.
    pub fn item(mut self, mut item: SettingsItem) -> Self {
        item.id = format!("{}-item-{}", self.id, self.items.len() + 1);
        if item.active.is_none() {
            item.active = Some(self.items.is_empty());
        }
        self.items.push(item);
        self
    }

    pub fn any(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettingsItem> {
        self.items.iter()
    }

    fn sidebar_node(&self, ctx: &RenderContext<'_>) -> Node {
        let mut list = Element::new("div").class("list-group list-group-transparent");
        for item in &self.items {
            let mut classes = ClassList::new();
            classes.push("list-group-item");
            classes.push("list-group-item-action");
            classes.push("d-flex");
            classes.push("align-items-center");
            classes.push_if(item.is_active(), "active");

            let mut link = Element::new("a")
                .attr("href", format!("#{}", item.id))
                .class(classes.to_string())
                .attr("data-bs-toggle", "tab")
                .attr("role", "tab");
            if let Some(icon) = &item.icon {
                let raw = ctx
                    .assets
                    .icon_svg(icon, false)
                    .unwrap_or_else(|| ERROR_ICON.to_owned());
                link = link.raw(svg::append_classes(&raw, &["me-2"]));
            }
            list = list.child(link.text(&item.title));
        }

        Element::new("div")
            .class("col-12 col-md-3 border-end")
            .child(
                Element::new("div")
                    .class("card-body")
                    .child(Element::new("h4").class("subheader").text(&self.title))
                    .child(list),
            )
            .into()
    }

    fn panes_node(&self) -> Node {
        let mut content = Element::new("div").class("tab-content");
        for item in &self.items {
            let mut classes = ClassList::new();
            classes.push("tab-pane");
            if item.is_active() {
                classes.push("active");
                classes.push("show");
            }
            let mut pane = Element::new("div")
                .attr("id", &item.id)
                .class(classes.to_string())
                .attr("role", "tabpanel");
            if let Some(body) = &item.content {
                pane = pane.raw(body.as_str());
            }
            content = content.child(pane);
        }

        Element::new("div")
            .class("col-12 col-md-9 d-flex flex-column")
            .child(content)
            .into()
    }
}

impl Component for SettingsPage {
    fn component_type(&self) -> &str {
        "settings_page"
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Builder
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        Element::new("div")
            .class("card")
            .child(
                Element::new("div")
                    .class("row g-0")
                    .child(self.sidebar_node(ctx))
                    .child(self.panes_node()),
            )
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
