//! Datagrid component: a responsive grid of titled data cells.

use serde::Deserialize;

use crate::component::{Component, ContentModel, RenderContext};
use crate::html::{Element, Html, Node};

// ---------------------------------------------------------------------------
// DatagridItem
// ---------------------------------------------------------------------------

/// One cell: a title plus either escaped text or prebuilt markup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatagridItem {
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(skip)]
    html: Option<Html>,
}

impl DatagridItem {
    /// A cell whose content is escaped text.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            html: None,
        }
    }

    /// A cell carrying raw markup, e.g. a rendered status or avatar.
    pub fn html(title: impl Into<String>, html: impl Into<Html>) -> Self {
        Self {
            title: title.into(),
            content: None,
            html: Some(html.into()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn content_node(&self) -> Node {
        if let Some(html) = &self.html {
            return Node::raw(html.as_str());
        }
        Node::text(self.content.as_deref().unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// Datagrid
// ---------------------------------------------------------------------------

/// A grid of labelled values.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Datagrid;
///
/// let grid = Datagrid::new()
///     .item("Registrar", "Third Party")
///     .item("Port number", "3306");
/// assert!(grid.has_items());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Datagrid {
    #[serde(default)]
    items: Vec<DatagridItem>,
}

impl Datagrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell with escaped text content.
    pub fn item(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.items.push(DatagridItem::new(title, content));
        self
    }

    /// Appends a cell with raw markup content.
    pub fn item_html(mut self, title: impl Into<String>, html: impl Into<Html>) -> Self {
        self.items.push(DatagridItem::html(title, html));
        self
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn items(&self) -> &[DatagridItem] {
        &self.items
    }
}

impl Component for Datagrid {
    fn component_type(&self) -> &str {
        "datagrid"
    }

    fn content_model(&self) -> ContentModel {
        ContentModel::Builder
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        let mut grid = Element::new("div").class("datagrid");
        for item in &self.items {
            grid = grid.child(
                Element::new("div")
                    .class("datagrid-item")
                    .child(
                        Element::new("div")
                            .class("datagrid-title")
                            .text(item.title()),
                    )
                    .child(
                        Element::new("div")
                            .class("datagrid-content")
                            .child(item.content_node()),
                    ),
            );
        }
        grid.into()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_to_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_titled_cells() {
        let grid = Datagrid::new()
            .item("Registrar", "Third Party")
            .item("Nameserver", "Third Party");
        let html = render_to_string(&grid);
        assert!(html.starts_with(r#"<div class="datagrid">"#));
        assert_eq!(html.matches(r#"<div class="datagrid-item">"#).count(), 2);
        assert!(html.contains(r#"<div class="datagrid-title">Registrar</div>"#));
        assert!(html.contains(r#"<div class="datagrid-content">Third Party</div>"#));
    }

    #[test]
    fn empty_grid_renders_bare_container() {
        let html = render_to_string(&Datagrid::new());
        assert_eq!(html, r#"<div class="datagrid"></div>"#);
        assert!(!Datagrid::new().has_items());
    }

    #[test]
    fn text_content_is_escaped() {
        let html = render_to_string(&Datagrid::new().item("Note", "<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn html_items_pass_markup_through() {
        let grid = Datagrid::new().item_html(
            "Status",
            r#"<span class="status status-green">Active</span>"#,
        );
        let html = render_to_string(&grid);
        assert!(html.contains(r#"<span class="status status-green">Active</span>"#));
    }

    #[test]
    fn uses_builder_content_model() {
        assert_eq!(Datagrid::new().content_model(), ContentModel::Builder);
    }

    #[test]
    fn deserializes_items_from_attrs() {
        let grid: Datagrid = serde_json::from_value(serde_json::json!({
            "items": [
                { "title": "Port", "content": "3306" },
                { "title": "Expiration" },
            ],
        }))
        .unwrap();
        assert_eq!(grid.items().len(), 2);
        let html = render_to_string(&grid);
        assert!(html.contains(r#"<div class="datagrid-title">Port</div>"#));
        assert!(html.contains(r#"<div class="datagrid-content"></div>"#));
    }
}
