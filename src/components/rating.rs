//! Rating component: a star-rating select.
//!
//! Renders a `<select>` carrying the Stimulus data attributes the rating
//! controller upgrades into clickable stars. Options default to a labeled
//! scale derived from `max_stars`; ids are drawn at construction time so
//! several ratings can share a page without colliding.

use rand::Rng;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::component::{Component, RenderContext};
use crate::html::{ClassList, Element, Node};

fn generate_id() -> String {
    format!("rating-{:08x}", rand::thread_rng().gen::<u32>())
}

fn default_name() -> String {
    "rating".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_max_stars() -> u8 {
    5
}

/// Option values arrive as strings or numbers; both compare as strings.
fn de_value_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

fn de_opt_value_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// RatingOption
// ---------------------------------------------------------------------------

/// One `<option>` of the rating select.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RatingOption {
    #[serde(deserialize_with = "de_value_string")]
    value: String,
    label: String,
}

impl RatingOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// A star-rating select.
///
/// # Examples
///
/// ```
/// use tabler_kit::components::Rating;
///
/// let rating = Rating::new().name("score").max_stars(3);
/// let labels: Vec<String> = rating
///     .effective_options()
///     .iter()
///     .map(|o| o.label().to_owned())
///     .collect();
/// assert_eq!(labels, ["Select a rating", "Excellent", "Very Good", "Average"]);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rating {
    #[serde(default = "generate_id")]
    id: String,
    #[serde(default = "default_name")]
    name: String,
    #[serde(default, deserialize_with = "de_opt_value_string")]
    value: Option<String>,
    /// `None` means "derive from `max_stars`".
    #[serde(default)]
    options: Option<Vec<RatingOption>>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    disabled: bool,
    #[serde(default)]
    custom_class: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default = "default_true")]
    tooltip: bool,
    #[serde(default = "default_true")]
    clearable: bool,
    #[serde(default = "default_max_stars")]
    max_stars: u8,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            id: generate_id(),
            name: default_name(),
            value: None,
            options: None,
            required: false,
            disabled: false,
            custom_class: None,
            size: None,
            variant: None,
            tooltip: true,
            clearable: true,
            max_stars: default_max_stars(),
        }
    }
}

impl Rating {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Replace the derived options with an explicit list.
    pub fn options(mut self, options: Vec<RatingOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Star size hint passed to the controller (e.g. "sm", "lg").
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Star variant hint passed to the controller.
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn tooltip(mut self, tooltip: bool) -> Self {
        self.tooltip = tooltip;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn max_stars(mut self, max_stars: u8) -> Self {
        self.max_stars = max_stars;
        self
    }

    /// The labeled scale derived from `max_stars`: a blank prompt plus up
    /// to five labeled steps, truncated to `max_stars + 1` entries.
    pub fn default_options(max_stars: u8) -> Vec<RatingOption> {
        let labels = ["Excellent", "Very Good", "Average", "Poor", "Terrible"];
        let mut options = vec![RatingOption::new("", "Select a rating")];
        for (offset, label) in labels.iter().enumerate() {
            if options.len() > max_stars as usize {
                break;
            }
            let value = i64::from(max_stars) - offset as i64;
            options.push(RatingOption::new(value.to_string(), *label));
        }
        options
    }

    /// The options that will render: explicit ones, or the derived scale.
    pub fn effective_options(&self) -> Vec<RatingOption> {
        match &self.options {
            Some(options) => options.clone(),
            None => Self::default_options(self.max_stars),
        }
    }

    /// Whether `option_value` matches the current value (string equality;
    /// no value selects the blank prompt).
    pub fn selected(&self, option_value: &str) -> bool {
        self.value.as_deref().unwrap_or("") == option_value
    }

    /// The Stimulus data attributes wired to the rating controller.
    pub fn controller_attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![
            ("data-controller".to_owned(), "tabler-ui--rating".to_owned()),
            (
                "data-tabler-ui--rating-id-value".to_owned(),
                self.id.clone(),
            ),
            (
                "data-tabler-ui--rating-tooltip-value".to_owned(),
                self.tooltip.to_string(),
            ),
            (
                "data-tabler-ui--rating-clearable-value".to_owned(),
                self.clearable.to_string(),
            ),
        ];
        if let Some(variant) = &self.variant {
            attrs.push((
                "data-tabler-ui--rating-variant-value".to_owned(),
                variant.clone(),
            ));
        }
        if let Some(size) = &self.size {
            attrs.push((
                "data-tabler-ui--rating-size-value".to_owned(),
                size.clone(),
            ));
        }
        attrs
    }

    pub fn select_classes(&self) -> String {
        let mut classes = ClassList::new();
        classes.push("form-select");
        classes.push_opt(self.custom_class.as_deref());
        classes.to_string()
    }
}

impl Component for Rating {
    fn component_type(&self) -> &str {
        "rating"
    }

    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        let mut select = Element::new("select")
            .class(self.select_classes())
            .attr("id", &self.id)
            .attr("name", &self.name)
            .bool_attr_if(self.required, "required")
            .bool_attr_if(self.disabled, "disabled");
        for (name, value) in self.controller_attributes() {
            select = select.attr(name, value);
        }

        for option in self.effective_options() {
            select = select.child(
                Element::new("option")
                    .attr("value", option.value())
                    .bool_attr_if(self.selected(option.value()), "selected")
                    .text(option.label()),
            );
        }
        select.into()
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

    // ── default options ──────────────────────────────────────────────

    #[test]
    fn five_star_scale() {
        let options = Rating::default_options(5);
        let pairs: Vec<(&str, &str)> = options.iter().map(|o| (o.value(), o.label())).collect();
        assert_eq!(
            pairs,
            vec![
                ("", "Select a rating"),
                ("5", "Excellent"),
                ("4", "Very Good"),
                ("3", "Average"),
                ("2", "Poor"),
                ("1", "Terrible"),
            ]
        );
    }

    #[test]
    fn scale_truncates_to_max_stars() {
        let options = Rating::default_options(3);
        assert_eq!(options.len(), 4);
        assert_eq!(options.last().map(RatingOption::label), Some("Average"));
        assert_eq!(options.last().map(RatingOption::value), Some("1"));
    }

    #[test]
    fn zero_stars_keeps_only_the_prompt() {
        let options = Rating::default_options(0);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label(), "Select a rating");
    }

    // ── selection ────────────────────────────────────────────────────

    #[test]
    fn no_value_selects_the_prompt() {
        let rating = Rating::new();
        assert!(rating.selected(""));
        assert!(!rating.selected("5"));
    }

    #[test]
    fn value_selects_by_string_equality() {
        let rating = Rating::new().value("4");
        assert!(rating.selected("4"));
        assert!(!rating.selected(""));
    }

    // ── ids and controller attrs ─────────────────────────────────────

    #[test]
    fn generated_id_has_hex_suffix() {
        let rating = Rating::new();
        let id = rating.controller_attributes()[1].1.clone();
        assert!(id.starts_with("rating-"));
        assert_eq!(id.len(), "rating-".len() + 8);
        assert!(id["rating-".len()..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn controller_attributes_cover_flags() {
        let rating = Rating::new()
            .id("r1")
            .tooltip(false)
            .variant("warm")
            .size("lg");
        let attrs = rating.controller_attributes();
        assert!(attrs.contains(&("data-controller".to_owned(), "tabler-ui--rating".to_owned())));
        assert!(attrs.contains(&("data-tabler-ui--rating-id-value".to_owned(), "r1".to_owned())));
        assert!(attrs.contains(&(
            "data-tabler-ui--rating-tooltip-value".to_owned(),
            "false".to_owned()
        )));
        assert!(attrs.contains(&(
            "data-tabler-ui--rating-variant-value".to_owned(),
            "warm".to_owned()
        )));
        assert!(attrs.contains(&(
            "data-tabler-ui--rating-size-value".to_owned(),
            "lg".to_owned()
        )));
    }

    #[test]
    fn unset_variant_and_size_are_omitted() {
        let attrs = Rating::new().controller_attributes();
        assert!(!attrs.iter().any(|(name, _)| name.contains("variant")));
        assert!(!attrs.iter().any(|(name, _)| name.contains("size")));
    }

    // ── markup ───────────────────────────────────────────────────────

    #[test]
    fn renders_select_with_options() {
        let html = render_to_string(&Rating::new().id("stars").name("score").value("2").max_stars(2));
        assert!(html.starts_with(r#"<select class="form-select" id="stars" name="score""#));
        assert!(html.contains(r#"data-controller="tabler-ui--rating""#));
        assert!(html.contains(r#"<option value="">Select a rating</option>"#));
        assert!(html.contains(r#"<option value="2" selected>Excellent</option>"#));
        assert!(html.contains(r#"<option value="1">Very Good</option>"#));
    }

    #[test]
    fn required_and_disabled_flags() {
        let html = render_to_string(&Rating::new().id("r").required(true).disabled(true));
        assert!(html.contains(" required"));
        assert!(html.contains(" disabled"));
    }

    // ── deserialization ──────────────────────────────────────────────

    #[test]
    fn numeric_values_deserialize_as_strings() {
        let rating: Rating = serde_json::from_value(serde_json::json!({
            "id": "r",
            "value": 3,
            "options": [
                { "value": 3, "label": "Great" },
                { "value": "", "label": "None" },
            ],
        }))
        .unwrap();
        assert!(rating.selected("3"));
        assert_eq!(rating.effective_options()[0].value(), "3");
    }

    #[test]
    fn missing_options_fall_back_to_scale() {
        let rating: Rating =
            serde_json::from_value(serde_json::json!({ "id": "r", "max_stars": 1 })).unwrap();
        assert_eq!(rating.effective_options().len(), 2);
    }
}
