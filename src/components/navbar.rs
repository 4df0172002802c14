//! Navbar component: a responsive navigation bar.
//!
//! Left and right navigation groups hold a tagged sum of entries: links,
//! dropdown menus, a dark-mode toggle, and vertical dividers. Groups are
//! configured through closures (`navbar.left(|nav| ...)`), mirroring how
//! menus get declared item by item, and the whole structure also
//! deserializes from attribute maps for the registry path.

use serde::Deserialize;

use crate::component::{Component, ContentModel, RenderContext};
use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::dropdown::MenuAlign;
use crate::html::{ClassList, Element, Html, Node};

fn default_url() -> String {
    "#".to_owned()
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// A plain navigation link.
#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    title: String,
    #[serde(default = "default_url")]
    url: String,
    #[serde(default)]
    active: bool,
    #[serde(default)]
    target: Option<String>,
}

impl NavLink {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: default_url(),
            active: false,
            target: None,
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Link target attribute (e.g. "_blank").
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// An entry of a navbar dropdown submenu.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavDropdownEntry {
    Link(NavLink),
    Divider,
}

/// A top-level entry of a navigation group.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEntry {
    Link(NavLink),
    Dropdown {
        title: String,
        #[serde(default)]
        align: MenuAlign,
        #[serde(default)]
        items: Vec<NavDropdownEntry>,
    },
    DarkModeToggle,
    Divider,
}

// ---------------------------------------------------------------------------
// NavDropdown
// ---------------------------------------------------------------------------

/// Builder proxy for a navbar dropdown submenu.
#[derive(Debug, Default)]
pub struct NavDropdown {
    entries: Vec<NavDropdownEntry>,
}

impl NavDropdown {
    pub fn add(&mut self, link: NavLink) {
        self.entries.push(NavDropdownEntry::Link(link));
    }

    pub fn add_divider(&mut self) {
        self.entries.push(NavDropdownEntry::Divider);
    }
}

// ---------------------------------------------------------------------------
// NavGroup
// ---------------------------------------------------------------------------

/// An ordered group of navigation entries (one side of the navbar).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NavGroup {
    entries: Vec<NavEntry>,
}

impl NavGroup {
    pub fn add(&mut self, link: NavLink) {
        self.entries.push(NavEntry::Link(link));
    }

    /// Add a dropdown submenu configured through the closure.
    pub fn dropdown(
        &mut self,
        title: impl Into<String>,
        align: MenuAlign,
        configure: impl FnOnce(&mut NavDropdown),
    ) {
        let mut menu = NavDropdown::default();
        configure(&mut menu);
        self.entries.push(NavEntry::Dropdown {
            title: title.into(),
            align,
            items: menu.entries,
        });
    }

    pub fn dark_mode_toggle(&mut self) {
        self.entries.push(NavEntry::DarkModeToggle);
    }

    /// Add a vertical separator.
    pub fn divider(&mut self) {
        self.entries.push(NavEntry::Divider);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NavEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavEntry> {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// Navbar
// ---------------------------------------------------------------------------

/// A responsive navigation bar with left/right groups.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::{MenuAlign, NavLink, Navbar};
///
/// let navbar = Navbar::new()
///     .brand("<span>MyApp</span>")
///     .left(|nav| {
///         nav.add(NavLink::new("Home").url("/").active(true));
///         nav.dropdown("Admin", MenuAlign::Left, |dd| {
///             dd.add(NavLink::new("Users").url("/admin/users"));
///             dd.add_divider();
///             dd.add(NavLink::new("Settings").url("/admin/settings"));
///         });
///     })
///     .right(|nav| nav.dark_mode_toggle());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navbar {
    #[serde(default)]
    brand: Option<Html>,
    #[serde(default = "default_true")]
    brand_autodark: bool,
    #[serde(default)]
    items_left: NavGroup,
    #[serde(default)]
    items_right: NavGroup,
}

fn default_true() -> bool {
    true
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            brand: None,
            brand_autodark: true,
            items_left: NavGroup::default(),
            items_right: NavGroup::default(),
        }
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brand markup, shown in an `<h1 class="navbar-brand">`. The caller
    /// renders it (typically a link or logo), so it passes through raw.
    pub fn brand(mut self, brand: impl Into<Html>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Whether the brand gets the autodark filter class (default true).
    pub fn brand_autodark(mut self, autodark: bool) -> Self {
        self.brand_autodark = autodark;
        self
    }

    /// Configure the left navigation group.
    pub fn left(mut self, configure: impl FnOnce(&mut NavGroup)) -> Self {
        configure(&mut self.items_left);
        self
    }

    /// Configure the right navigation group.
    pub fn right(mut self, configure: impl FnOnce(&mut NavGroup)) -> Self {
        configure(&mut self.items_right);
        self
    }

    pub fn items_left(&self) -> &NavGroup {
        &self.items_left
    }

    pub fn items_right(&self) -> &NavGroup {
        &self.items_right
    }

    fn brand_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("navbar-brand");
        classes.push_if(self.brand_autodark, "navbar-brand-autodark");
        classes.to_string()
    }

    fn entry_node(&self, entry: &NavEntry, ctx: &RenderContext<'_>) -> Node {
        match entry {
            NavEntry::Link(link) => {
                let mut classes = ClassList::new();
                classes.push("nav-item");
                classes.push_if(link.active, "active");
                Element::new("li")
                    .class(classes.to_string())
                    .child(
                        Element::new("a")
                            .class("nav-link")
                            .attr("href", &link.url)
                            .attr_opt("target", link.target.as_deref())
                            .text(&link.title),
                    )
                    .into()
            }
            NavEntry::Dropdown {
                title,
                align,
                items,
            } => {
                let toggle = Element::new("a")
                    .class("nav-link dropdown-toggle")
                    .attr("href", "#")
                    .attr("data-bs-toggle", "dropdown")
                    .attr("role", "button")
                    .attr("aria-expanded", "false")
                    .text(title);

                let mut menu_classes = ClassList::new();
                menu_classes.push("dropdown-menu");
                menu_classes.push_if(*align == MenuAlign::Right, "dropdown-menu-end");
                let mut menu = Element::new("div").class(menu_classes.to_string());
                for item in items {
                    menu = menu.child(match item {
                        NavDropdownEntry::Link(link) => Element::new("a")
                            .class("dropdown-item")
                            .attr("href", &link.url)
                            .attr_opt("target", link.target.as_deref())
                            .text(&link.title),
                        NavDropdownEntry::Divider => {
                            Element::new("div").class("dropdown-divider")
                        }
                    });
                }

                Element::new("li")
                    .class("nav-item dropdown")
                    .child(toggle)
                    .child(menu)
                    .into()
            }
            NavEntry::DarkModeToggle => Element::new("li")
                .class("nav-item")
                .child(DarkModeToggle::new().render(ctx))
                .into(),
            NavEntry::Divider => Element::new("li")
                .class("nav-item d-flex align-items-center")
                .child(Element::new("div").class("vr"))
                .into(),
        }
    }

    fn group_node(&self, group: &NavGroup, extra_class: &str, ctx: &RenderContext<'_>) -> Node {
        let mut classes = ClassList::new();
        classes.push("navbar-nav");
        classes.push(extra_class);
        let mut list = Element::new("ul").class(classes.to_string());
        for entry in group.iter() {
            list = list.child(self.entry_node(entry, ctx));
        }
        list.into()
    }
}

impl Component for Navbar {
    fn component_type(&self) -> &str {
        "navbar"
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Builder
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let toggler = Element::new("button")
            .class("navbar-toggler")
            .attr("type", "button")
            .attr("data-bs-toggle", "collapse")
            .attr("data-bs-target", "#navbar-menu")
            .attr("aria-controls", "navbar-menu")
            .attr("aria-expanded", "false")
            .attr("aria-label", "Toggle navigation")
            .child(Element::new("span").class("navbar-toggler-icon"));

        let mut collapse = Element::new("div")
            .class("collapse navbar-collapse")
            .attr("id", "navbar-menu")
            .child(self.group_node(&self.items_left, "", ctx));
        if !self.items_right.is_empty() {
            collapse = collapse.child(self.group_node(&self.items_right, "ms-auto", ctx));
        }

        let mut container = Element::new("div").class("container-xl").child(toggler);
        if let Some(brand) = &self.brand {
            container = container.child(
                Element::new("h1")
                    .class(self.brand_classes())
                    .raw(brand.as_str()),
            );
        }
        container = container.child(collapse);

        Element::new("header")
            .class("navbar navbar-expand-md")
            .child(container)
            .into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
