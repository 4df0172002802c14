//! Per-input options for the form builder.
//!
//! [`InputOptions`] collects everything an input strategy can be asked to
//! do: label handling, hints, collections, selectgroup styling, input-group
//! affixes, extra attributes. One options value configures one call to
//! [`FormBuilder::input`](crate::form::FormBuilder::input) or to a strategy
//! method.

use serde::Deserialize;

use crate::html::Html;

// ---------------------------------------------------------------------------
// InputKind
// ---------------------------------------------------------------------------

/// Rendering strategy for a single input.
///
/// Usually inferred from the attribute's declared type; set explicitly via
/// [`InputOptions::kind`] to override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    String,
    Text,
    Boolean,
    Select,
    GroupedSelect,
    File,
    RadioButtons,
    CheckBoxes,
    Toggle,
    Color,
    Imagecheck,
    InputGroup,
    Floating,
}

/// How the label above a control is produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// Humanize the attribute name.
    #[default]
    Auto,
    /// Render no label element.
    Hidden,
    /// Use the given text.
    Text(String),
}

/// Control flavor inside a floating-label wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatingKind {
    #[default]
    Text,
    Textarea,
}

// ---------------------------------------------------------------------------
// Choice
// ---------------------------------------------------------------------------

/// One selectable option in a collection input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    value: String,
    text: String,
    #[serde(default)]
    image: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            image: None,
        }
    }

    /// Image URL, used by the imagecheck strategy.
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

// ---------------------------------------------------------------------------
// InputOptions
// ---------------------------------------------------------------------------

/// Options for one rendered input.
///
/// # Examples
///
/// ```
/// use tabler_kit::form::InputOptions;
///
/// let options = InputOptions::new()
///     .label("Plan")
///     .required(true)
///     .hint("Billed monthly.")
///     .choice("free", "Free")
///     .choice("pro", "Pro");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    pub(crate) label: LabelMode,
    pub(crate) label_description: Option<String>,
    pub(crate) required: bool,
    pub(crate) hint: Option<String>,
    pub(crate) kind: Option<InputKind>,
    pub(crate) collection: Vec<Choice>,
    pub(crate) grouped_collection: Vec<(String, Vec<Choice>)>,
    pub(crate) input_html: Vec<(String, String)>,
    pub(crate) input_class: Option<String>,
    pub(crate) placeholder: Option<String>,
    pub(crate) multiple: bool,
    pub(crate) selectgroup: bool,
    pub(crate) selectgroup_pills: bool,
    pub(crate) selectgroup_buttons: bool,
    pub(crate) colors: Option<Vec<String>>,
    pub(crate) show_text: bool,
    pub(crate) prepend: Option<String>,
    pub(crate) append: Option<String>,
    pub(crate) prepend_button: Option<Html>,
    pub(crate) append_button: Option<Html>,
    pub(crate) floating_kind: FloatingKind,
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label text, instead of the humanized attribute name.
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelMode::Text(text.into());
        self
    }

    /// Render no label element.
    pub fn hide_label(mut self) -> Self {
        self.label = LabelMode::Hidden;
        self
    }

    /// Secondary text right-aligned inside the label.
    pub fn label_description(mut self, text: impl Into<String>) -> Self {
        self.label_description = Some(text.into());
        self
    }

    /// Mark the field required (asterisk on the label).
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Help text under the control.
    pub fn hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(text.into());
        self
    }

    /// Force a rendering strategy instead of inferring one.
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Choices for select, radio, checkbox and imagecheck strategies.
    pub fn collection(mut self, choices: impl IntoIterator<Item = Choice>) -> Self {
        self.collection.extend(choices);
        self
    }

    /// Append a single choice.
    pub fn choice(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.collection.push(Choice::new(value, text));
        self
    }

    /// Append a labelled group of choices (grouped select).
    pub fn group(
        mut self,
        label: impl Into<String>,
        choices: impl IntoIterator<Item = Choice>,
    ) -> Self {
        self.grouped_collection
            .push((label.into(), choices.into_iter().collect()));
        self
    }

    /// Extra attribute on the control element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.input_html.push((name.into(), value.into()));
        self
    }

    /// Extra classes on the control, after the strategy's own.
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.input_class = Some(class.into());
        self
    }

    /// Placeholder attribute on the control.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Allow multiple selections (selects, imagecheck).
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Selectgroup styling for radio/checkbox collections.
    pub fn selectgroup(mut self) -> Self {
        self.selectgroup = true;
        self
    }

    /// Selectgroup styling, pill-shaped.
    pub fn selectgroup_pills(mut self) -> Self {
        self.selectgroup_pills = true;
        self
    }

    /// Selectgroup styling, boxed buttons.
    pub fn selectgroup_buttons(mut self) -> Self {
        self.selectgroup_buttons = true;
        self
    }

    /// Palette for the color strategy, replacing the default.
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Show choice captions under imagecheck figures.
    pub fn show_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }

    /// Text affix before the control (input group).
    pub fn prepend(mut self, text: impl Into<String>) -> Self {
        self.prepend = Some(text.into());
        self
    }

    /// Text affix after the control (input group).
    pub fn append(mut self, text: impl Into<String>) -> Self {
        self.append = Some(text.into());
        self
    }

    /// Markup placed before the control, e.g. a rendered button.
    pub fn prepend_button(mut self, html: impl Into<Html>) -> Self {
        self.prepend_button = Some(html.into());
        self
    }

    /// Markup placed after the control.
    pub fn append_button(mut self, html: impl Into<Html>) -> Self {
        self.append_button = Some(html.into());
        self
    }

    /// Floating strategy renders a textarea instead of a text input.
    pub fn floating_textarea(mut self) -> Self {
        self.floating_kind = FloatingKind::Textarea;
        self
    }

    pub(crate) fn label_hidden(&self) -> bool {
        self.label == LabelMode::Hidden
    }

    pub(crate) fn wants_selectgroup(&self) -> bool {
        self.selectgroup || self.selectgroup_pills || self.selectgroup_buttons
    }
}

// ===========================================================================
// Tests
// ===========================================================================
