//! Node tree and HTML serialization.
//!
//! [`Element`] is a builder for a single tag; [`Node`] is the tree it lives
//! in. Serialization is a plain depth-first walk: text is escaped, raw
//! fragments pass through, attributes render in insertion order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::html::escape::escape_into;

/// Tags serialized without a closing tag. Children of a void element are
/// ignored by the serializer.
const VOID_TAGS: &[&str] = &["area", "base", "br", "col", "hr", "img", "input", "link", "meta"];

fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with tag, attributes and children.
    Element(Element),
    /// Plain text, escaped when serialized.
    Text(String),
    /// Pre-rendered markup, written verbatim.
    Raw(String),
    /// A sequence of nodes with no wrapper element.
    Fragment(Vec<Node>),
    /// Nothing. Serializes to the empty string.
    Empty,
}

impl Node {
    /// Create a text node (escaped on output).
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a raw node (written verbatim — caller vouches for the markup).
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    /// Create a fragment from a list of nodes.
    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }

    /// Serialize this node to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_into(out),
            Node::Text(text) => escape_into(out, text),
            Node::Raw(markup) => out.push_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    child.write_into(out);
                }
            }
            Node::Empty => {}
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Html> for Node {
    fn from(html: Html) -> Self {
        Node::Raw(html.0)
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A single element under construction.
///
/// Builder methods consume and return `self` so elements nest naturally:
///
/// ```
/// use tabler_kit::html::Element;
///
/// let card = Element::new("div")
///     .class("card")
///     .child(Element::new("div").class("card-body").text("Hello"));
/// assert_eq!(
///     card.to_html(),
///     r#"<div class="card"><div class="card-body">Hello</div></div>"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    /// `(name, value)`; `None` value renders a bare attribute.
    attrs: Vec<(String, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Repeated `class` attributes merge (space-joined);
    /// any other repeated name overwrites the earlier value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            match (&name[..], &mut existing.1) {
                ("class", Some(current)) if !current.is_empty() && !value.is_empty() => {
                    current.push(' ');
                    current.push_str(&value);
                }
                (_, slot) => *slot = Some(value),
            }
        } else {
            self.attrs.push((name, Some(value)));
        }
        self
    }

    /// Set an attribute when the value is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a bare attribute (`disabled`, `multiple`, `selected`, ...).
    pub fn bool_attr(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.attrs.iter().any(|(n, _)| *n == name) {
            self.attrs.push((name, None));
        }
        self
    }

    /// Set a bare attribute when `condition` holds.
    pub fn bool_attr_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition {
            self.bool_attr(name)
        } else {
            self
        }
    }

    /// Add to the `class` attribute. Empty strings are ignored.
    pub fn class(self, class: impl Into<String>) -> Self {
        let class = class.into();
        if class.is_empty() {
            self
        } else {
            self.attr("class", class)
        }
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present.
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Append several children.
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append an escaped text child.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Append a verbatim markup child.
    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::raw(markup))
    }

    /// The tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Serialize this element to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                escape_into(out, value);
                out.push('"');
            }
        }
        out.push('>');
        if is_void_tag(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

// ---------------------------------------------------------------------------
// Html
// ---------------------------------------------------------------------------

/// A rendered, trusted HTML fragment.
///
/// The output type of every component render, and the value type of content
/// slots. Constructing one asserts the markup is already safe; plain strings
/// go through [`Node::text`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Wrap an already-rendered markup string.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Render a node tree into a fragment.
    pub fn from_node(node: &Node) -> Self {
        Self(node.to_html())
    }

    /// Escape plain text into a fragment.
    pub fn from_text(text: &str) -> Self {
        Self(Node::text(text).to_html())
    }

    /// The markup as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the fragment is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Node> for Html {
    fn from(node: Node) -> Self {
        Self::from_node(&node)
    }
}

impl From<Element> for Html {
    fn from(el: Element) -> Self {
        Self(el.to_html())
    }
}

impl From<String> for Html {
    fn from(markup: String) -> Self {
        Self(markup)
    }
}

impl From<&str> for Html {
    fn from(markup: &str) -> Self {
        Self(markup.to_owned())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Element serialization ────────────────────────────────────────

    #[test]
    fn empty_element() {
        assert_eq!(Element::new("div").to_html(), "<div></div>");
    }

    #[test]
    fn element_with_attrs_in_order() {
        let el = Element::new("a").attr("href", "/x").attr("target", "_blank");
        assert_eq!(el.to_html(), r#"<a href="/x" target="_blank"></a>"#);
    }

    #[test]
    fn element_with_text_child() {
        let el = Element::new("span").text("hi");
        assert_eq!(el.to_html(), "<span>hi</span>");
    }

    #[test]
    fn text_is_escaped() {
        let el = Element::new("span").text("<b>&\"'");
        assert_eq!(el.to_html(), "<span>&lt;b&gt;&amp;&quot;&#39;</span>");
    }

    #[test]
    fn attr_value_is_escaped() {
        let el = Element::new("div").attr("title", r#"a "quote" & more"#);
        assert_eq!(
            el.to_html(),
            r#"<div title="a &quot;quote&quot; &amp; more"></div>"#
        );
    }

    #[test]
    fn raw_passes_through() {
        let el = Element::new("div").raw("<svg></svg>");
        assert_eq!(el.to_html(), "<div><svg></svg></div>");
    }

    #[test]
    fn void_element_has_no_closing_tag() {
        let el = Element::new("input").attr("type", "text");
        assert_eq!(el.to_html(), r#"<input type="text">"#);
    }

    #[test]
    fn void_element_ignores_children() {
        let el = Element::new("br").text("nope");
        assert_eq!(el.to_html(), "<br>");
    }

    #[test]
    fn bool_attr_renders_bare() {
        let el = Element::new("input").attr("type", "checkbox").bool_attr("checked");
        assert_eq!(el.to_html(), r#"<input type="checkbox" checked>"#);
    }

    #[test]
    fn bool_attr_if_skips_when_false() {
        let el = Element::new("input").bool_attr_if(false, "disabled");
        assert_eq!(el.to_html(), "<input>");
    }

    #[test]
    fn bool_attr_dedups() {
        let el = Element::new("input").bool_attr("required").bool_attr("required");
        assert_eq!(el.to_html(), "<input required>");
    }

    #[test]
    fn class_merges() {
        let el = Element::new("div").class("alert").class("alert-info");
        assert_eq!(el.to_html(), r#"<div class="alert alert-info"></div>"#);
    }

    #[test]
    fn class_ignores_empty() {
        let el = Element::new("div").class("").class("x").class("");
        assert_eq!(el.to_html(), r#"<div class="x"></div>"#);
    }

    #[test]
    fn non_class_attr_overwrites() {
        let el = Element::new("a").attr("href", "/a").attr("href", "/b");
        assert_eq!(el.to_html(), r#"<a href="/b"></a>"#);
    }

    #[test]
    fn attr_opt() {
        let el = Element::new("select")
            .attr_opt("data-size", Some("lg"))
            .attr_opt("data-variant", None::<String>);
        assert_eq!(el.to_html(), r#"<select data-size="lg"></select>"#);
    }

    #[test]
    fn nested_elements() {
        let el = Element::new("ul")
            .child(Element::new("li").text("one"))
            .child(Element::new("li").text("two"));
        assert_eq!(el.to_html(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn child_opt() {
        let el = Element::new("div")
            .child_opt(Some(Element::new("span")))
            .child_opt(None::<Element>);
        assert_eq!(el.to_html(), "<div><span></span></div>");
    }

    #[test]
    fn get_attr() {
        let el = Element::new("div").class("a").attr("id", "main");
        assert_eq!(el.get_attr("id"), Some("main"));
        assert_eq!(el.get_attr("class"), Some("a"));
        assert_eq!(el.get_attr("missing"), None);
    }

    // ── Node ─────────────────────────────────────────────────────────

    #[test]
    fn node_text() {
        assert_eq!(Node::text("a < b").to_html(), "a &lt; b");
    }

    #[test]
    fn node_raw() {
        assert_eq!(Node::raw("<hr>").to_html(), "<hr>");
    }

    #[test]
    fn node_empty() {
        assert_eq!(Node::Empty.to_html(), "");
    }

    #[test]
    fn node_fragment_concatenates() {
        let frag = Node::fragment(vec![
            Node::text("a"),
            Node::Empty,
            Element::new("b").text("c").into(),
        ]);
        assert_eq!(frag.to_html(), "a<b>c</b>");
    }

    // ── Html ─────────────────────────────────────────────────────────

    #[test]
    fn html_display() {
        let html = Html::new("<p>x</p>");
        assert_eq!(html.to_string(), "<p>x</p>");
        assert_eq!(html.as_str(), "<p>x</p>");
    }

    #[test]
    fn html_is_blank() {
        assert!(Html::empty().is_blank());
        assert!(Html::new("  \n ").is_blank());
        assert!(!Html::new("<p></p>").is_blank());
    }

    #[test]
    fn html_from_text_escapes() {
        assert_eq!(Html::from_text("<x>").as_str(), "&lt;x&gt;");
    }

    #[test]
    fn html_into_node_is_raw() {
        let node: Node = Html::new("<em>hi</em>").into();
        assert_eq!(node.to_html(), "<em>hi</em>");
    }

    #[test]
    fn html_serde_is_transparent() {
        let html: Html = serde_json::from_str(r#""<b>x</b>""#).unwrap();
        assert_eq!(html.as_str(), "<b>x</b>");
        assert_eq!(serde_json::to_string(&html).unwrap(), r#""<b>x</b>""#);
    }
}
