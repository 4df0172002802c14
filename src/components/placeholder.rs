//! Placeholder component: skeleton loading states.
//!
//! Covers single text lines, avatars, images, buttons, and two composite
//! layouts (card, list). Size, animation, and ratio inputs are validated
//! against the Tabler sets and silently dropped (or defaulted) when
//! invalid, so a stale caller can never break a page.

use serde::Deserialize;

use crate::component::{Component, RenderContext};
use crate::html::{ClassList, Element, Node};

const SIZES: [&str; 4] = ["xs", "sm", "lg", "xl"];
const ANIMATIONS: [&str; 2] = ["glow", "wave"];
const RATIOS: [&str; 4] = ["1x1", "4x3", "16x9", "21x9"];

// ---------------------------------------------------------------------------
// PlaceholderKind
// ---------------------------------------------------------------------------

/// What the placeholder stands in for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// One or more text lines. Unknown kind names fall back here.
    #[default]
    Text,
    Avatar,
    Image,
    Button,
    Card,
    List,
}

impl PlaceholderKind {
    fn from_name(name: &str) -> Self {
        match name {
            "avatar" => PlaceholderKind::Avatar,
            "image" => PlaceholderKind::Image,
            "button" => PlaceholderKind::Button,
            "card" => PlaceholderKind::Card,
            "list" => PlaceholderKind::List,
            _ => PlaceholderKind::Text,
        }
    }
}

impl<'de> Deserialize<'de> for PlaceholderKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(PlaceholderKind::from_name(&name))
    }
}

// ---------------------------------------------------------------------------
// Placeholder
// ---------------------------------------------------------------------------

/// A skeleton loading placeholder.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::{Placeholder, PlaceholderKind};
///
/// let skeleton = Placeholder::new()
///     .kind(PlaceholderKind::Text)
///     .lines(vec![10, 11, 8])
///     .animation("glow");
/// assert!(skeleton.has_animation());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Placeholder {
    #[serde(rename = "type", default)]
    kind: PlaceholderKind,
    #[serde(default)]
    width: Option<u8>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    animation: Option<String>,
    #[serde(default)]
    ratio: Option<String>,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    lines: Option<Vec<u8>>,
    #[serde(default = "default_true")]
    rounded: bool,
    #[serde(default)]
    custom_class: Option<String>,
    #[serde(default = "default_true")]
    show_image: bool,
    #[serde(default = "default_true")]
    show_button: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            kind: PlaceholderKind::Text,
            width: None,
            size: None,
            animation: None,
            ratio: None,
            variant: None,
            lines: None,
            rounded: true,
            custom_class: None,
            show_image: true,
            show_button: true,
        }
    }
}

impl Placeholder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: PlaceholderKind) -> Self {
        self.kind = kind;
        self
    }

    /// Column width (1-12) for single-line text and button placeholders.
    pub fn width(mut self, width: u8) -> Self {
        self.width = Some(width);
        self
    }

    /// Size variant (xs, sm, lg, xl).
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Animation (glow, wave).
    pub fn animation(mut self, animation: impl Into<String>) -> Self {
        self.animation = Some(animation.into());
        self
    }

    /// Aspect ratio for image placeholders (1x1, 4x3, 16x9, 21x9).
    pub fn ratio(mut self, ratio: impl Into<String>) -> Self {
        self.ratio = Some(ratio.into());
        self
    }

    /// Button color variant for button placeholders.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Column widths for multiple text lines.
    pub fn lines(mut self, lines: Vec<u8>) -> Self {
        self.lines = Some(lines);
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    pub fn show_image(mut self, show: bool) -> Self {
        self.show_image = show;
        self
    }

    pub fn show_button(mut self, show: bool) -> Self {
        self.show_button = show;
        self
    }

    // --- class derivations -------------------------------------------------

    fn valid_size(&self) -> Option<&str> {
        self.size
            .as_deref()
            .filter(|size| SIZES.contains(size))
    }

    fn valid_animation(&self) -> Option<&str> {
        self.animation
            .as_deref()
            .filter(|animation| ANIMATIONS.contains(animation))
    }

    /// Classes for a text/inline placeholder span.
    pub fn placeholder_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("placeholder");
        if let Some(size) = self.valid_size() {
            classes.push(format!("placeholder-{size}"));
        }
        if let Some(width) = self.width {
            classes.push(format!("col-{width}"));
        }
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }

    /// Classes for the animation wrapper.
    pub fn wrapper_classes(&self) -> String {
        let mut classes = ClassList::new();
        if let Some(animation) = self.valid_animation() {
            classes.push(format!("placeholder-{animation}"));
        }
        if self.kind == PlaceholderKind::Card {
            classes.push_opt(self.custom_class.as_deref());
        }
        classes.to_string()
    }

    pub fn avatar_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("avatar");
        classes.push("placeholder");
        classes.push_if(self.rounded, "avatar-rounded");
        if let Some(size) = &self.size {
            classes.push(format!("avatar-{size}"));
        }
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }

    pub fn button_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("btn");
        classes.push("disabled");
        classes.push("placeholder");
        if let Some(variant) = &self.variant {
            classes.push(format!("btn-{variant}"));
        }
        if let Some(width) = self.width {
            classes.push(format!("col-{width}"));
        }
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }

    /// The ratio class, defaulting to the widest.
    pub fn ratio_class(&self) -> String {
        match self.ratio.as_deref().filter(|ratio| RATIOS.contains(ratio)) {
            Some(ratio) => format!("ratio-{ratio}"),
            None => "ratio-21x9".to_owned(),
        }
    }

    pub fn has_animation(&self) -> bool {
        self.valid_animation().is_some()
    }

    /// Column widths to render for text placeholders.
    pub fn text_lines(&self) -> Vec<u8> {
        match &self.lines {
            Some(lines) => lines.clone(),
            None => vec![self.width.unwrap_or(9)],
        }
    }

    // --- markup ------------------------------------------------------------

    /// A bare placeholder line span at the given column width.
    fn line_span(&self, width: u8) -> Element {
        let mut classes = ClassList::new();
        classes.push("placeholder");
        if let Some(size) = self.valid_size() {
            classes.push(format!("placeholder-{size}"));
        }
        classes.push(format!("col-{width}"));
        Element::new("span").class(classes.to_string())
    }

    fn text_node(&self) -> Node {
        let spans = self.text_lines().into_iter().map(|width| {
            let mut classes = ClassList::new();
            classes.push("placeholder");
            if let Some(size) = self.valid_size() {
                classes.push(format!("placeholder-{size}"));
            }
            classes.push(format!("col-{width}"));
            classes.push_opt(self.custom_class.as_deref());
            Element::new("span").class(classes.to_string()).into()
        });
        Node::fragment(spans.collect())
    }

    fn image_node(&self) -> Node {
        Element::new("div")
            .class(format!("ratio {} placeholder", self.ratio_class()))
            .into()
    }

    fn button_node(&self) -> Node {
        Element::new("a")
            .attr("href", "#")
            .attr("tabindex", "-1")
            .class(self.button_classes())
            .attr("aria-hidden", "true")
            .into()
    }

    fn card_node(&self) -> Node {
        let mut card = Element::new("div").class("card");
        if self.show_image {
            card = card.child(
                Element::new("div")
                    .class(format!("ratio {} card-img-top placeholder", self.ratio_class())),
            );
        }
        let mut body = Element::new("div")
            .class("card-body")
            .child(self.line_span(9))
            .child(self.line_span(7))
            .child(self.line_span(5));
        if self.show_button {
            body = body.child(
                Element::new("a")
                    .attr("href", "#")
                    .attr("tabindex", "-1")
                    .class("btn disabled placeholder col-4")
                    .attr("aria-hidden", "true"),
            );
        }
        card.child(body).into()
    }

    fn list_node(&self) -> Node {
        let rows = (0..3).map(|_| {
            Element::new("div")
                .class("row align-items-center")
                .child(
                    Element::new("div")
                        .class("col-auto")
                        .child(Element::new("span").class(self.avatar_classes())),
                )
                .child(
                    Element::new("div")
                        .class("col")
                        .child(self.line_span(7))
                        .child(self.line_span(5)),
                )
                .into()
        });
        Node::fragment(rows.collect())
    }
}

impl Component for Placeholder {
    fn component_type(&self) -> &str {
        "placeholder"
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        let inner = match self.kind {
            PlaceholderKind::Text => self.text_node(),
            PlaceholderKind::Avatar => Element::new("span")
                .class(self.avatar_classes())
                .into(),
            PlaceholderKind::Image => self.image_node(),
            PlaceholderKind::Button => self.button_node(),
            PlaceholderKind::Card => self.card_node(),
            PlaceholderKind::List => self.list_node(),
        };

        let wrapper = self.wrapper_classes();
        if wrapper.is_empty() {
            inner
        } else {
            Element::new("div").class(wrapper).child(inner).into()
        }
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

    // ── class derivations ────────────────────────────────────────────

    #[test]
    fn placeholder_classes_with_all_parts() {
        let p = Placeholder::new().size("sm").width(6).custom_class("me-1");
        assert_eq!(p.placeholder_classes(), "placeholder placeholder-sm col-6 me-1");
    }

    #[test]
    fn invalid_size_is_dropped() {
        let p = Placeholder::new().size("jumbo").width(6);
        assert_eq!(p.placeholder_classes(), "placeholder col-6");
    }

    #[test]
    fn avatar_size_is_not_validated() {
        // Avatars accept any Tabler avatar size suffix.
        let p = Placeholder::new().kind(PlaceholderKind::Avatar).size("xxl");
        assert_eq!(p.avatar_classes(), "avatar placeholder avatar-rounded avatar-xxl");
    }

    #[test]
    fn avatar_without_rounding() {
        let p = Placeholder::new().kind(PlaceholderKind::Avatar).rounded(false);
        assert_eq!(p.avatar_classes(), "avatar placeholder");
    }

    #[test]
    fn button_classes_stack() {
        let p = Placeholder::new()
            .kind(PlaceholderKind::Button)
            .variant("primary")
            .width(4);
        assert_eq!(p.button_classes(), "btn disabled placeholder btn-primary col-4");
    }

    #[test]
    fn ratio_falls_back_to_widest() {
        assert_eq!(Placeholder::new().ratio("16x9").ratio_class(), "ratio-16x9");
        assert_eq!(Placeholder::new().ratio("3x2").ratio_class(), "ratio-21x9");
        assert_eq!(Placeholder::new().ratio_class(), "ratio-21x9");
    }

    #[test]
    fn animation_validation() {
        assert!(Placeholder::new().animation("glow").has_animation());
        assert!(Placeholder::new().animation("wave").has_animation());
        assert!(!Placeholder::new().animation("spin").has_animation());
        assert!(!Placeholder::new().has_animation());
    }

    #[test]
    fn wrapper_includes_custom_class_only_for_cards() {
        let card = Placeholder::new()
            .kind(PlaceholderKind::Card)
            .animation("glow")
            .custom_class("shadow");
        assert_eq!(card.wrapper_classes(), "placeholder-glow shadow");

        let text = Placeholder::new().animation("glow").custom_class("shadow");
        assert_eq!(text.wrapper_classes(), "placeholder-glow");
    }

    // ── text lines ───────────────────────────────────────────────────

    #[test]
    fn text_lines_fallbacks() {
        assert_eq!(Placeholder::new().text_lines(), vec![9]);
        assert_eq!(Placeholder::new().width(4).text_lines(), vec![4]);
        assert_eq!(
            Placeholder::new().lines(vec![10, 11, 8]).text_lines(),
            vec![10, 11, 8]
        );
    }

    // ── markup ───────────────────────────────────────────────────────

    #[test]
    fn text_renders_span_per_line() {
        let html = render_to_string(&Placeholder::new().lines(vec![10, 8]));
        assert_eq!(
            html,
            concat!(
                r#"<span class="placeholder col-10"></span>"#,
                r#"<span class="placeholder col-8"></span>"#
            )
        );
    }

    #[test]
    fn animation_adds_wrapper() {
        let html = render_to_string(&Placeholder::new().animation("glow"));
        assert_eq!(
            html,
            r#"<div class="placeholder-glow"><span class="placeholder col-9"></span></div>"#
        );
    }

    #[test]
    fn image_markup() {
        let html = render_to_string(&Placeholder::new().kind(PlaceholderKind::Image).ratio("1x1"));
        assert_eq!(html, r#"<div class="ratio ratio-1x1 placeholder"></div>"#);
    }

    #[test]
    fn button_markup() {
        let html = render_to_string(
            &Placeholder::new()
                .kind(PlaceholderKind::Button)
                .variant("primary")
                .width(3),
        );
        assert_eq!(
            html,
            r##"<a href="#" tabindex="-1" class="btn disabled placeholder btn-primary col-3" aria-hidden="true"></a>"##
        );
    }

    #[test]
    fn card_contains_image_lines_and_button() {
        let html = render_to_string(&Placeholder::new().kind(PlaceholderKind::Card));
        assert!(html.contains(r#"<div class="card">"#));
        assert!(html.contains("card-img-top placeholder"));
        assert!(html.contains(r#"<span class="placeholder col-9"></span>"#));
        assert!(html.contains(r#"<span class="placeholder col-7"></span>"#));
        assert!(html.contains(r#"<span class="placeholder col-5"></span>"#));
        assert!(html.contains("btn disabled placeholder col-4"));
    }

    #[test]
    fn card_parts_can_be_hidden() {
        let html = render_to_string(
            &Placeholder::new()
                .kind(PlaceholderKind::Card)
                .show_image(false)
                .show_button(false),
        );
        assert!(!html.contains("card-img-top"));
        assert!(!html.contains("btn disabled"));
    }

    #[test]
    fn list_renders_three_rows() {
        let html = render_to_string(&Placeholder::new().kind(PlaceholderKind::List));
        assert_eq!(html.matches(r#"<div class="row align-items-center">"#).count(), 3);
        assert_eq!(html.matches("avatar placeholder").count(), 3);
    }

    // ── deserialization ──────────────────────────────────────────────

    #[test]
    fn kind_deserializes_from_type_attr() {
        let p: Placeholder =
            serde_json::from_value(serde_json::json!({ "type": "avatar", "size": "sm" })).unwrap();
        assert_eq!(p.avatar_classes(), "avatar placeholder avatar-rounded avatar-sm");
    }

    #[test]
    fn unknown_kind_falls_back_to_text() {
        let p: Placeholder =
            serde_json::from_value(serde_json::json!({ "type": "banner" })).unwrap();
        let html = render_to_string(&p);
        assert!(html.contains("placeholder col-9"));
    }
}
