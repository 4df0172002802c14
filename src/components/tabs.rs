//! Tabs component: navigable tab panels.
//!
//! Tabs are declared through the builder: each [`Tab`] added gets an id
//! derived from the container id (`{id}-tab-{n}`, 1-based), and the first
//! tab is active unless some tab sets `active` explicitly. Styles map to
//! the Tabler nav variants; the card style wraps the whole thing in a card
//! with the nav in the header.

use serde::Deserialize;

use crate::assets::{svg, ERROR_ICON};
use crate::component::{Component, ContentModel, RenderContext};
use crate::html::{ClassList, Element, Html, Node};

// ---------------------------------------------------------------------------
// TabStyle
// ---------------------------------------------------------------------------

/// Visual style of the tab navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabStyle {
    /// Classic tabs. Unknown style names fall back here.
    #[default]
    Tabs,
    Pills,
    Card,
    Underline,
}

impl TabStyle {
    fn from_name(name: &str) -> Self {
        match name {
            "pills" => TabStyle::Pills,
            "card" => TabStyle::Card,
            "underline" => TabStyle::Underline,
            _ => TabStyle::Tabs,
        }
    }
}

impl<'de> Deserialize<'de> for TabStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(TabStyle::from_name(&name))
    }
}

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// A single tab: title, optional icon and badge, and its panel content.
#[derive(Debug, Clone, Default)]
pub struct Tab {
    id: String,
    title: String,
    icon: Option<String>,
    badge: Option<String>,
    badge_color: Option<String>,
    active: Option<bool>,
    content: Option<Html>,
}

impl Tab {
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

    /// Trailing badge text.
    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Badge color (default "blue").
    pub fn badge_color(mut self, color: impl Into<String>) -> Self {
        self.badge_color = Some(color.into());
        self
    }

    /// Explicitly mark this tab active or inactive. Unset means "active
    /// iff it is the first tab added".
    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Panel content for this tab.
    pub fn content(mut self, content: impl Into<Html>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The assigned panel id (empty until the tab is added to a [`Tabs`]).
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    fn badge_color_or_default(&self) -> &str {
        self.badge_color.as_deref().unwrap_or("blue")
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Navigable tab panels.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::{Tab, Tabs};
///
/// let tabs = Tabs::new("profile")
///     .tab(Tab::new("Account").icon("settings").content("<p>Account</p>"))
///     .tab(Tab::new("Security"));
/// assert_eq!(tabs.nav_classes(), "nav nav-tabs");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tabs {
    id: String,
    #[serde(default)]
    style: TabStyle,
    #[serde(default)]
    custom_class: Option<String>,
    #[serde(skip)]
    tabs: Vec<Tab>,
}

impl Tabs {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            style: TabStyle::Tabs,
            custom_class: None,
            tabs: Vec::new(),
        }
    }

    pub fn style(mut self, style: TabStyle) -> Self {
        self.style = style;
        self
    }

    /// Additional CSS classes on the nav element.
    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Add a tab. Assigns the panel id and resolves the active flag: the
    /// first tab added is active unless some tab says otherwise.
    pub fn tab(mut self, mut tab: Tab) -> Self {
        tab.id = format!("{}-tab-{}", self.id, self.tabs.len() + 1);
        if tab.active.is_none() {
            tab.active = Some(self.tabs.is_empty());
        }
        self.tabs.push(tab);
        self
    }

    /// The nav CSS classes for the configured style.
    pub fn nav_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("nav");
        match self.style {
            TabStyle::Pills => classes.push("nav-pills"),
            TabStyle::Card => {
                classes.push("nav-tabs");
                classes.push("card-header-tabs");
            }
            TabStyle::Underline => {
                classes.push("nav-tabs");
                classes.push("nav-tabs-alt");
            }
            TabStyle::Tabs => classes.push("nav-tabs"),
        }
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }

    pub fn any(&self) -> bool {
        !self.tabs.is_empty()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    fn nav_node(&self, ctx: &RenderContext<'_>) -> Node {
        let mut nav = Element::new("ul")
            .class(self.nav_classes())
            .attr("data-bs-toggle", "tabs")
            .attr("role", "tablist");

        for tab in &self.tabs {
            let mut link_classes = ClassList::new();
            link_classes.push("nav-link");
            link_classes.push_if(tab.is_active(), "active");

            let mut link = Element::new("a")
                .attr("href", format!("#{}", tab.id))
                .class(link_classes.to_string())
                .attr("data-bs-toggle", "tab")
                .attr("role", "tab")
                .attr("aria-selected", if tab.is_active() { "true" } else { "false" });

            if let Some(icon) = &tab.icon {
                let raw = ctx
                    .assets
                    .icon_svg(icon, false)
                    .unwrap_or_else(|| ERROR_ICON.to_owned());
                link = link.raw(svg::append_classes(&raw, &["me-2"]));
            }
            link = link.text(&tab.title);
            if let Some(badge) = &tab.badge {
                link = link.child(
                    Element::new("span")
                        .class(format!("badge bg-{} ms-2", tab.badge_color_or_default()))
                        .text(badge),
                );
            }

            nav = nav.child(
                Element::new("li")
                    .class("nav-item")
                    .attr("role", "presentation")
                    .child(link),
            );
        }
        nav.into()
    }

    fn panes_node(&self) -> Node {
        let mut content = Element::new("div").class("tab-content");
        for tab in &self.tabs {
            let mut pane_classes = ClassList::new();
            pane_classes.push("tab-pane");
            if tab.is_active() {
                pane_classes.push("active");
                pane_classes.push("show");
            }
            let mut pane = Element::new("div")
                .attr("id", &tab.id)
                .class(pane_classes.to_string())
                .attr("role", "tabpanel");
            if let Some(body) = &tab.content {
                pane = pane.raw(body.as_str());
            }
            content = content.child(pane);
        }
        content.into()
    }
}

impl Component for Tabs {
    fn component_type(&self) -> &str {
        "tabs"
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Builder
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let nav = self.nav_node(ctx);
        let panes = self.panes_node();

        if self.style == TabStyle::Card {
            Element::new("div")
                .class("card")
                .child(Element::new("div").class("card-header").child(nav))
                .child(Element::new("div").class("card-body").child(panes))
                .into()
        } else {
            Node::fragment(vec![nav, panes])
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
