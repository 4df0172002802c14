//! The form builder: model-bound Tabler form fragments.
//!
//! [`FormBuilder`] borrows a [`FormModel`] and renders one labelled,
//! hinted, error-annotated control per call. [`FormBuilder::input`] picks a
//! strategy from the attribute's declared type; the strategy methods are
//! also public for direct use.

use tracing::trace;

use crate::form::model::{AttributeType, FormModel};
use crate::form::options::{Choice, FloatingKind, InputKind, InputOptions, LabelMode};
use crate::html::{escape, ClassList, Element, Html, Node};

/// Default palette for [`FormBuilder::color_input`].
pub const DEFAULT_COLORS: [&str; 6] = [
    "#206bc4", "#4299e1", "#0ca678", "#f59f00", "#d63939", "#ae3ec9",
];

/// Radio or checkbox, for the collection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CheckKind {
    Radio,
    Checkbox,
}

impl CheckKind {
    fn input_type(self) -> &'static str {
        match self {
            CheckKind::Radio => "radio",
            CheckKind::Checkbox => "checkbox",
        }
    }
}

// ---------------------------------------------------------------------------
// FormBuilder
// ---------------------------------------------------------------------------

/// Renders form controls bound to a model.
///
/// # Examples
///
/// ```
/// use tabler_kit::form::{FormBuilder, FormModel, InputOptions};
///
/// struct Login;
///
/// impl FormModel for Login {
///     fn model_name(&self) -> &str {
///         "login"
///     }
/// }
///
/// let form = FormBuilder::new(&Login);
/// let html = form.input("email", &InputOptions::new().required(true));
/// assert!(html.as_str().contains(r#"name="login[email]""#));
/// assert!(html.as_str().contains(r#"type="email""#));
/// ```
#[derive(Debug)]
pub struct FormBuilder<'a, M: FormModel> {
    model: &'a M,
}

impl<'a, M: FormModel> FormBuilder<'a, M> {
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Render one input, selecting the strategy from the options and the
    /// attribute's declared type.
    ///
    /// An explicit [`InputOptions::kind`] wins; otherwise a collection
    /// renders a select (grouped when the choices are grouped), text
    /// attributes a textarea, booleans a checkbox, and everything else the
    /// string strategy.
    pub fn input(&self, attribute: &str, options: &InputOptions) -> Html {
        let kind = self.resolve_kind(attribute, options);
        trace!(attribute, ?kind, "rendering form input");
        match kind {
            InputKind::String => self.string_input(attribute, options),
            InputKind::Text => self.text_input(attribute, options),
            InputKind::Boolean => self.boolean_input(attribute, options),
            InputKind::Select => self.select_input(attribute, options),
            InputKind::GroupedSelect => self.grouped_select_input(attribute, options),
            InputKind::File => self.file_input(attribute, options),
            InputKind::RadioButtons => self.radio_buttons_input(attribute, options),
            InputKind::CheckBoxes => self.check_boxes_input(attribute, options),
            InputKind::Toggle => self.toggle_input(attribute, options),
            InputKind::Color => self.color_input(attribute, options),
            InputKind::Imagecheck => self.imagecheck_input(attribute, options),
            InputKind::InputGroup => self.input_group(attribute, options),
            InputKind::Floating => self.floating_input(attribute, options),
        }
    }

    fn resolve_kind(&self, attribute: &str, options: &InputOptions) -> InputKind {
        if let Some(kind) = options.kind {
            return kind;
        }
        if !options.grouped_collection.is_empty() {
            return InputKind::GroupedSelect;
        }
        if !options.collection.is_empty() {
            return InputKind::Select;
        }
        match self.model.attribute_type(attribute) {
            AttributeType::Text => InputKind::Text,
            AttributeType::Boolean => InputKind::Boolean,
            _ => InputKind::String,
        }
    }

    // -----------------------------------------------------------------------
    // Naming
    // -----------------------------------------------------------------------

    /// `{model}[{attribute}]`
    pub fn field_name(&self, attribute: &str) -> String {
        format!("{}[{}]", self.model.model_name(), attribute)
    }

    /// `{model}_{attribute}`
    pub fn field_id(&self, attribute: &str) -> String {
        format!("{}_{}", self.model.model_name(), attribute)
    }

    fn multi_field_name(&self, attribute: &str) -> String {
        format!("{}[]", self.field_name(attribute))
    }

    fn choice_id(&self, attribute: &str, value: &str) -> String {
        format!("{}_{}", self.field_id(attribute), sanitize_to_id(value))
    }

    // -----------------------------------------------------------------------
    // Strategies
    // -----------------------------------------------------------------------

    /// Single-line input, element type picked from the declared attribute
    /// type and the attribute name.
    pub fn string_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let body = Node::fragment(vec![
            self.maybe_label(attribute, options),
            self.string_field(attribute, options).into(),
        ]);
        self.form_group(attribute, options, body)
    }

    /// Textarea.
    pub fn text_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let body = Node::fragment(vec![
            self.maybe_label(attribute, options),
            self.text_area(attribute, options).into(),
        ]);
        self.form_group(attribute, options, body)
    }

    /// Single checkbox wrapped in a `form-check` label.
    pub fn boolean_input(&self, attribute: &str, options: &InputOptions) -> Html {
        self.check_control(attribute, options, false)
    }

    /// Single checkbox styled as a switch.
    pub fn toggle_input(&self, attribute: &str, options: &InputOptions) -> Html {
        self.check_control(attribute, options, true)
    }

    /// Select over [`InputOptions::collection`].
    pub fn select_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let current = self.model.attribute_value(attribute);
        let mut select = self.select_element(attribute, options);
        for choice in &options.collection {
            select = select.child(option_node(choice, current.as_deref()));
        }
        let body = Node::fragment(vec![self.maybe_label(attribute, options), select.into()]);
        self.form_group(attribute, options, body)
    }

    /// Select with `<optgroup>` sections from [`InputOptions::group`].
    pub fn grouped_select_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let current = self.model.attribute_value(attribute);
        let mut select = self.select_element(attribute, options);
        for (label, choices) in &options.grouped_collection {
            let mut optgroup = Element::new("optgroup").attr("label", label.clone());
            for choice in choices {
                optgroup = optgroup.child(option_node(choice, current.as_deref()));
            }
            select = select.child(optgroup);
        }
        let body = Node::fragment(vec![self.maybe_label(attribute, options), select.into()]);
        self.form_group(attribute, options, body)
    }

    /// File picker.
    pub fn file_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let input = self.apply_extras(
            Element::new("input")
                .attr("type", "file")
                .attr("name", self.field_name(attribute))
                .attr("id", self.field_id(attribute))
                .attr("class", self.control_class("form-control", attribute, options)),
            options,
        );
        let body = Node::fragment(vec![self.maybe_label(attribute, options), input.into()]);
        self.form_group(attribute, options, body)
    }

    /// One radio per choice.
    pub fn radio_buttons_input(&self, attribute: &str, options: &InputOptions) -> Html {
        self.collection_of(CheckKind::Radio, attribute, options)
    }

    /// One checkbox per choice; submits under `{model}[{attribute}][]`.
    pub fn check_boxes_input(&self, attribute: &str, options: &InputOptions) -> Html {
        self.collection_of(CheckKind::Checkbox, attribute, options)
    }

    /// Color swatch picker over radios.
    pub fn color_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let palette: Vec<String> = match &options.colors {
            Some(colors) => colors.clone(),
            None => DEFAULT_COLORS.iter().map(|c| (*c).to_owned()).collect(),
        };
        let current = self.model.attribute_value(attribute);
        let mut wrapper = Element::new("div").class("form-colorinput");
        for color in &palette {
            wrapper = wrapper.child(
                Element::new("label")
                    .class("form-colorinput-color")
                    .attr("style", format!("background-color: {color}"))
                    .child(
                        Element::new("input")
                            .attr("type", "radio")
                            .attr("name", self.field_name(attribute))
                            .attr("id", self.choice_id(attribute, color))
                            .attr("value", color.clone())
                            .attr("class", "form-colorinput-input")
                            .bool_attr_if(current.as_deref() == Some(color.as_str()), "checked"),
                    ),
            );
        }
        let body = Node::fragment(vec![self.maybe_label(attribute, options), wrapper.into()]);
        self.form_group(attribute, options, body)
    }

    /// Image-based selection: each choice is a figure with a hidden
    /// radio (or checkbox when [`InputOptions::multiple`]).
    pub fn imagecheck_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let kind = if options.multiple {
            CheckKind::Checkbox
        } else {
            CheckKind::Radio
        };
        let mut wrapper = Element::new("div").class("form-imagecheck");
        for choice in &options.collection {
            let figure = Element::new("figure").class("form-imagecheck-figure").child(
                Element::new("img")
                    .attr("src", choice.image_url().unwrap_or(choice.value()))
                    .attr("alt", choice.text())
                    .attr("class", "form-imagecheck-image"),
            );
            let mut item = Element::new("label")
                .class("form-imagecheck-item")
                .child(self.choice_input(kind, attribute, choice, "form-imagecheck-input"))
                .child(figure);
            if options.show_text {
                item = item.child(
                    Element::new("span")
                        .class("form-imagecheck-caption")
                        .text(choice.text()),
                );
            }
            wrapper = wrapper.child(item);
        }
        let body = Node::fragment(vec![self.maybe_label(attribute, options), wrapper.into()]);
        self.form_group(attribute, options, body)
    }

    /// String field with text or button affixes.
    pub fn input_group(&self, attribute: &str, options: &InputOptions) -> Html {
        let mut group = Element::new("div").class("input-group");
        if let Some(prepend) = options.prepend.as_deref() {
            group = group.child(Element::new("span").class("input-group-text").text(prepend));
        }
        if let Some(button) = &options.prepend_button {
            group = group.child(Node::raw(button.as_str()));
        }
        group = group.child(self.string_field(attribute, options));
        if let Some(append) = options.append.as_deref() {
            group = group.child(Element::new("span").class("input-group-text").text(append));
        }
        if let Some(button) = &options.append_button {
            group = group.child(Node::raw(button.as_str()));
        }
        let body = Node::fragment(vec![self.maybe_label(attribute, options), group.into()]);
        self.form_group(attribute, options, body)
    }

    /// Floating label: control first, label after, placeholder mirrors the
    /// label so the float animation has something to measure.
    pub fn floating_input(&self, attribute: &str, options: &InputOptions) -> Html {
        let text = self.label_text(attribute, options);
        let control = match options.floating_kind {
            FloatingKind::Textarea => {
                let mut area = Element::new("textarea")
                    .attr("name", self.field_name(attribute))
                    .attr("id", self.field_id(attribute))
                    .attr("class", self.control_class("form-control", attribute, options))
                    .attr("placeholder", text.clone());
                if let Some(value) = self.model.attribute_value(attribute) {
                    area = area.text(value);
                }
                area
            }
            FloatingKind::Text => Element::new("input")
                .attr("type", "text")
                .attr("name", self.field_name(attribute))
                .attr("id", self.field_id(attribute))
                .attr("class", self.control_class("form-control", attribute, options))
                .attr("placeholder", text.clone())
                .attr_opt("value", self.model.attribute_value(attribute)),
        };
        let wrapper = Element::new("div")
            .class("form-floating")
            .child(self.apply_extras(control, options))
            .child(
                Element::new("label")
                    .attr("for", self.field_id(attribute))
                    .text(text),
            );
        self.form_group(attribute, options, wrapper.into())
    }

    // -----------------------------------------------------------------------
    // Standalone pieces
    // -----------------------------------------------------------------------

    /// A bare `<label for>` outside any group.
    pub fn label(&self, attribute: &str, text: Option<&str>) -> Html {
        let content = match text {
            Some(text) => text.to_owned(),
            None => humanize(attribute),
        };
        Element::new("label")
            .attr("for", self.field_id(attribute))
            .text(content)
            .into()
    }

    /// Primary submit button.
    pub fn submit(&self, text: &str) -> Html {
        Element::new("button")
            .attr("type", "submit")
            .class("btn btn-primary")
            .text(text)
            .into()
    }

    // -----------------------------------------------------------------------
    // Shared fragments
    // -----------------------------------------------------------------------

    fn form_group(&self, attribute: &str, options: &InputOptions, body: Node) -> Html {
        let mut group = Element::new("div")
            .class("mb-3")
            .class(attribute)
            .child(body);
        if let Some(hint) = options.hint.as_deref() {
            group = group.child(Element::new("small").class("form-hint").text(hint));
        }
        if let Some(errors) = self.error_node(attribute) {
            group = group.child(errors);
        }
        Html::from_node(&group.into())
    }

    fn error_node(&self, attribute: &str) -> Option<Node> {
        let errors = self.model.errors_on(attribute);
        if errors.is_empty() {
            return None;
        }
        let joined = errors
            .iter()
            .map(|message| escape(message).into_owned())
            .collect::<Vec<_>>()
            .join("<br />");
        Some(
            Element::new("div")
                .class("invalid-feedback")
                .raw(joined)
                .into(),
        )
    }

    fn label_text(&self, attribute: &str, options: &InputOptions) -> String {
        match &options.label {
            LabelMode::Text(text) => text.clone(),
            _ => humanize(attribute),
        }
    }

    fn maybe_label(&self, attribute: &str, options: &InputOptions) -> Node {
        if options.label_hidden() {
            Node::Empty
        } else {
            self.label_with_description(attribute, options)
        }
    }

    fn label_with_description(&self, attribute: &str, options: &InputOptions) -> Node {
        let text = self.label_text(attribute, options);
        if let Some(description) = options.label_description.as_deref() {
            Element::new("label")
                .attr("for", self.field_id(attribute))
                .class("form-label")
                .child(Element::new("span").text(text))
                .child_opt(options.required.then(|| {
                    Element::new("span").class("text-danger").text(" *")
                }))
                .child(
                    Element::new("span")
                        .class("form-label-description")
                        .text(description),
                )
                .into()
        } else {
            Element::new("label")
                .attr("for", self.field_id(attribute))
                .class("form-label")
                .class(if options.required { "required" } else { "" })
                .text(text)
                .into()
        }
    }

    /// Base classes plus `is-invalid` plus any user classes.
    fn control_class(&self, base: &str, attribute: &str, options: &InputOptions) -> String {
        let mut classes = ClassList::new();
        classes.push(base);
        classes.push_if(self.model.has_errors(attribute), "is-invalid");
        classes.push_opt(options.input_class.as_deref());
        classes.to_string()
    }

    /// Base classes plus user classes, without validation state.
    fn plain_class(&self, base: &str, options: &InputOptions) -> String {
        let mut classes = ClassList::new();
        classes.push(base);
        classes.push_opt(options.input_class.as_deref());
        classes.to_string()
    }

    fn apply_extras(&self, mut el: Element, options: &InputOptions) -> Element {
        el = el.attr_opt("placeholder", options.placeholder.as_deref());
        for (name, value) in &options.input_html {
            el = el.attr(name.clone(), value.clone());
        }
        el
    }

    /// The single-line control: a datepicker for dates, a number field for
    /// numerics, otherwise a text-like input sniffed from the name.
    fn string_field(&self, attribute: &str, options: &InputOptions) -> Element {
        let attribute_type = self.model.attribute_type(attribute);
        if attribute_type == AttributeType::Date {
            return self
                .text_like(attribute, "text", options)
                .attr("data-controller", "tabler-ui--datepicker")
                .attr("autocomplete", "off");
        }
        if attribute_type.is_numeric() {
            return self.text_like(attribute, "number", options);
        }
        let input_type = if attribute.contains("password") {
            "password"
        } else if attribute.contains("email") {
            "email"
        } else if attribute.contains("phone") {
            "tel"
        } else if attribute.contains("url") {
            "url"
        } else {
            "text"
        };
        self.text_like(attribute, input_type, options)
    }

    fn text_like(&self, attribute: &str, input_type: &str, options: &InputOptions) -> Element {
        let input = Element::new("input")
            .attr("type", input_type)
            .attr("name", self.field_name(attribute))
            .attr("id", self.field_id(attribute))
            .attr("class", self.control_class("form-control", attribute, options))
            .attr_opt("value", self.model.attribute_value(attribute));
        self.apply_extras(input, options)
    }

    fn text_area(&self, attribute: &str, options: &InputOptions) -> Element {
        let mut area = Element::new("textarea")
            .attr("name", self.field_name(attribute))
            .attr("id", self.field_id(attribute))
            .attr("class", self.control_class("form-control", attribute, options));
        if let Some(value) = self.model.attribute_value(attribute) {
            area = area.text(value);
        }
        self.apply_extras(area, options)
    }

    fn select_element(&self, attribute: &str, options: &InputOptions) -> Element {
        let name = if options.multiple {
            self.multi_field_name(attribute)
        } else {
            self.field_name(attribute)
        };
        let select = Element::new("select")
            .attr("name", name)
            .attr("id", self.field_id(attribute))
            .attr("class", self.control_class("form-select", attribute, options))
            .bool_attr_if(options.multiple, "multiple");
        self.apply_extras(select, options)
    }

    /// Checkbox semantics: a hidden `0` submits the unchecked state, the
    /// checkbox itself submits `1`.
    fn check_box_pair(&self, attribute: &str, options: &InputOptions) -> Node {
        let checked = matches!(
            self.model.attribute_value(attribute).as_deref(),
            Some("1") | Some("true")
        );
        let hidden = Element::new("input")
            .attr("type", "hidden")
            .attr("name", self.field_name(attribute))
            .attr("value", "0")
            .attr("autocomplete", "off");
        let check = self.apply_extras(
            Element::new("input")
                .attr("type", "checkbox")
                .attr("name", self.field_name(attribute))
                .attr("id", self.field_id(attribute))
                .attr("value", "1")
                .attr("class", self.plain_class("form-check-input", options))
                .bool_attr_if(checked, "checked"),
            options,
        );
        Node::fragment(vec![hidden.into(), check.into()])
    }

    fn check_control(&self, attribute: &str, options: &InputOptions, switch: bool) -> Html {
        let body = Element::new("label")
            .class("form-check")
            .class(if switch { "form-switch" } else { "" })
            .child(self.check_box_pair(attribute, options))
            .child(
                Element::new("span")
                    .class("form-check-label")
                    .text(self.label_text(attribute, options)),
            );
        self.form_group(attribute, options, body.into())
    }

    fn choice_input(
        &self,
        kind: CheckKind,
        attribute: &str,
        choice: &Choice,
        class: &str,
    ) -> Element {
        let name = match kind {
            CheckKind::Radio => self.field_name(attribute),
            CheckKind::Checkbox => self.multi_field_name(attribute),
        };
        let checked = self.model.attribute_value(attribute).as_deref() == Some(choice.value());
        Element::new("input")
            .attr("type", kind.input_type())
            .attr("name", name)
            .attr("id", self.choice_id(attribute, choice.value()))
            .attr("value", choice.value())
            .attr("class", class)
            .bool_attr_if(checked, "checked")
    }

    fn collection_of(&self, kind: CheckKind, attribute: &str, options: &InputOptions) -> Html {
        let control = if options.wants_selectgroup() {
            self.selectgroup_collection(kind, attribute, options)
        } else {
            self.check_collection(kind, attribute, options)
        };
        let body = Node::fragment(vec![self.maybe_label(attribute, options), control]);
        self.form_group(attribute, options, body)
    }

    fn check_collection(&self, kind: CheckKind, attribute: &str, options: &InputOptions) -> Node {
        let mut nodes: Vec<Node> = options
            .collection
            .iter()
            .map(|choice| {
                Element::new("label")
                    .class("form-check")
                    .child(self.choice_input(kind, attribute, choice, "form-check-input"))
                    .child(
                        Element::new("span")
                            .class("form-check-label")
                            .text(choice.text()),
                    )
                    .into()
            })
            .collect();
        if kind == CheckKind::Checkbox {
            nodes.push(self.collection_hidden(attribute));
        }
        Node::fragment(nodes)
    }

    fn selectgroup_collection(
        &self,
        kind: CheckKind,
        attribute: &str,
        options: &InputOptions,
    ) -> Node {
        let mut classes = ClassList::new();
        classes.push("form-selectgroup");
        classes.push_if(options.selectgroup_pills, "form-selectgroup-pills");
        classes.push_if(options.selectgroup_buttons, "form-selectgroup-boxes");

        let mut wrapper = Element::new("div").attr("class", classes.to_string());
        for choice in &options.collection {
            wrapper = wrapper.child(
                Element::new("label")
                    .class("form-selectgroup-item")
                    .child(self.choice_input(kind, attribute, choice, "form-selectgroup-input"))
                    .child(
                        Element::new("span")
                            .class("form-selectgroup-label")
                            .text(choice.text()),
                    ),
            );
        }
        if kind == CheckKind::Checkbox {
            wrapper = wrapper.child(self.collection_hidden(attribute));
        }
        wrapper.into()
    }

    /// Empty submission marker so clearing every box still updates the model.
    fn collection_hidden(&self, attribute: &str) -> Node {
        Element::new("input")
            .attr("type", "hidden")
            .attr("name", self.multi_field_name(attribute))
            .attr("value", "")
            .attr("autocomplete", "off")
            .into()
    }
}

fn option_node(choice: &Choice, current: Option<&str>) -> Node {
    Element::new("option")
        .attr("value", choice.value())
        .bool_attr_if(current == Some(choice.value()), "selected")
        .text(choice.text())
        .into()
}

/// Attribute name to label text: drops a trailing `_id`, turns underscores
/// into spaces, uppercases the first letter.
pub fn humanize(attribute: &str) -> String {
    let stripped = attribute.strip_suffix("_id").unwrap_or(attribute);
    let spaced = stripped.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Choice value to id fragment: whitespace to underscores, everything but
/// word characters and hyphens dropped, lowercased.
fn sanitize_to_id(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect::<String>()
        .to_lowercase()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SampleModel;
    use pretty_assertions::assert_eq;

    fn form(model: &SampleModel) -> FormBuilder<'_, SampleModel> {
        FormBuilder::new(model)
    }

    // ── helpers ──────────────────────────────────────────────────────

    #[test]
    fn humanize_strips_id_and_capitalizes() {
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("country_id"), "Country");
        assert_eq!(humanize("email"), "Email");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn sanitize_to_id_normalizes_values() {
        assert_eq!(sanitize_to_id("Free Plan"), "free_plan");
        assert_eq!(sanitize_to_id("#206bc4"), "206bc4");
        assert_eq!(sanitize_to_id("a-b_c"), "a-b_c");
    }

    #[test]
    fn field_naming() {
        let model = SampleModel::new("user");
        let form = form(&model);
        assert_eq!(form.field_name("email"), "user[email]");
        assert_eq!(form.field_id("email"), "user_email");
    }

    // ── string strategy ──────────────────────────────────────────────

    #[test]
    fn string_input_wraps_label_and_control() {
        let model = SampleModel::new("user");
        let html = form(&model).string_input("name", &InputOptions::new());
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="mb-3 name">"#,
                r#"<label for="user_name" class="form-label">Name</label>"#,
                r#"<input type="text" name="user[name]" id="user_name" class="form-control">"#,
                r#"</div>"#,
            )
        );
    }

    #[test]
    fn name_sniffing_picks_input_types() {
        let model = SampleModel::new("user");
        let form = form(&model);
        let options = InputOptions::new();
        assert!(form.string_input("password", &options).as_str().contains(r#"type="password""#));
        assert!(form.string_input("email", &options).as_str().contains(r#"type="email""#));
        assert!(form.string_input("phone", &options).as_str().contains(r#"type="tel""#));
        assert!(form.string_input("homepage_url", &options).as_str().contains(r#"type="url""#));
        assert!(form.string_input("nickname", &options).as_str().contains(r#"type="text""#));
    }

    #[test]
    fn date_attribute_gets_datepicker() {
        let model = SampleModel::new("user").typed("born_on", AttributeType::Date);
        let html = form(&model).input("born_on", &InputOptions::new());
        assert!(html.as_str().contains(r#"data-controller="tabler-ui--datepicker""#));
        assert!(html.as_str().contains(r#"autocomplete="off""#));
        assert!(html.as_str().contains(r#"type="text""#));
    }

    #[test]
    fn numeric_attributes_get_number_inputs() {
        let model = SampleModel::new("user")
            .typed("age", AttributeType::Integer)
            .typed("height", AttributeType::Float);
        let builder = form(&model);
        assert!(builder.input("age", &InputOptions::new()).as_str().contains(r#"type="number""#));
        assert!(builder.input("height", &InputOptions::new()).as_str().contains(r#"type="number""#));
    }

    #[test]
    fn value_renders_into_control() {
        let model = SampleModel::new("user").value("name", "Ada");
        let html = form(&model).string_input("name", &InputOptions::new());
        assert!(html.as_str().contains(r#"value="Ada""#));
    }

    #[test]
    fn errors_add_invalid_class_and_feedback() {
        let model = SampleModel::new("user")
            .error("name", "can't be blank")
            .error("name", "is too short");
        let html = form(&model).string_input("name", &InputOptions::new());
        assert!(html.as_str().contains("form-control is-invalid"));
        assert!(html.as_str().contains(
            r#"<div class="invalid-feedback">can&#39;t be blank<br />is too short</div>"#
        ));
    }

    #[test]
    fn hint_renders_under_control() {
        let model = SampleModel::new("user");
        let html = form(&model).string_input("name", &InputOptions::new().hint("Full name."));
        assert!(html.as_str().contains(r#"<small class="form-hint">Full name.</small>"#));
    }

    #[test]
    fn hidden_label_skips_label_element() {
        let model = SampleModel::new("user");
        let html = form(&model).string_input("name", &InputOptions::new().hide_label());
        assert!(!html.as_str().contains("<label"));
    }

    #[test]
    fn required_label_and_description() {
        let model = SampleModel::new("user");
        let html = form(&model).string_input("name", &InputOptions::new().required(true));
        assert!(html.as_str().contains(r#"class="form-label required""#));

        let html = form(&model).string_input(
            "name",
            &InputOptions::new()
                .required(true)
                .label_description("Visible to others"),
        );
        assert!(html.as_str().contains(r#"<span class="text-danger"> *</span>"#));
        assert!(html
            .as_str()
            .contains(r#"<span class="form-label-description">Visible to others</span>"#));
    }

    #[test]
    fn input_html_and_classes_merge() {
        let model = SampleModel::new("user");
        let html = form(&model).string_input(
            "name",
            &InputOptions::new()
                .input_class("w-50")
                .attr("data-test", "name")
                .placeholder("Jane Doe"),
        );
        assert!(html.as_str().contains(r#"class="form-control w-50""#));
        assert!(html.as_str().contains(r#"data-test="name""#));
        assert!(html.as_str().contains(r#"placeholder="Jane Doe""#));
    }

    // ── textarea ─────────────────────────────────────────────────────

    #[test]
    fn text_attribute_renders_textarea_with_value() {
        let model = SampleModel::new("post")
            .typed("body", AttributeType::Text)
            .value("body", "Hello <world>");
        let html = form(&model).input("body", &InputOptions::new());
        assert!(html.as_str().contains("<textarea"));
        assert!(html.as_str().contains("Hello &lt;world&gt;"));
    }

    // ── checkbox family ──────────────────────────────────────────────

    #[test]
    fn boolean_input_renders_hidden_then_checkbox() {
        let model = SampleModel::new("user").typed("admin", AttributeType::Boolean);
        let html = form(&model).input("admin", &InputOptions::new());
        assert_eq!(
            html.as_str(),
            concat!(
                r#"<div class="mb-3 admin">"#,
                r#"<label class="form-check">"#,
                r#"<input type="hidden" name="user[admin]" value="0" autocomplete="off">"#,
                r#"<input type="checkbox" name="user[admin]" id="user_admin" value="1" class="form-check-input">"#,
                r#"<span class="form-check-label">Admin</span>"#,
                r#"</label>"#,
                r#"</div>"#,
            )
        );
    }

    #[test]
    fn checkbox_checked_from_model_value() {
        let truthy = SampleModel::new("user")
            .typed("admin", AttributeType::Boolean)
            .value("admin", "1");
        assert!(form(&truthy).boolean_input("admin", &InputOptions::new()).as_str().contains("checked"));

        let stringly = SampleModel::new("user")
            .typed("admin", AttributeType::Boolean)
            .value("admin", "true");
        assert!(form(&stringly).boolean_input("admin", &InputOptions::new()).as_str().contains("checked"));

        let falsy = SampleModel::new("user").typed("admin", AttributeType::Boolean);
        assert!(!form(&falsy).boolean_input("admin", &InputOptions::new()).as_str().contains("checked"));
    }

    #[test]
    fn toggle_adds_switch_class() {
        let model = SampleModel::new("user");
        let html = form(&model).toggle_input("notifications", &InputOptions::new());
        assert!(html.as_str().contains(r#"class="form-check form-switch""#));
    }

    // ── selects ──────────────────────────────────────────────────────

    #[test]
    fn collection_implies_select() {
        let model = SampleModel::new("user").value("plan", "pro");
        let options = InputOptions::new().choice("free", "Free").choice("pro", "Pro");
        let html = form(&model).input("plan", &options);
        assert!(html.as_str().contains(r#"<select name="user[plan]" id="user_plan" class="form-select">"#));
        assert!(html.as_str().contains(r#"<option value="free">Free</option>"#));
        assert!(html.as_str().contains(r#"<option value="pro" selected>Pro</option>"#));
    }

    #[test]
    fn multiple_select_gets_array_name() {
        let model = SampleModel::new("user");
        let options = InputOptions::new().choice("a", "A").multiple(true);
        let html = form(&model).select_input("tags", &options);
        assert!(html.as_str().contains(r#"name="user[tags][]""#));
        assert!(html.as_str().contains("multiple"));
    }

    #[test]
    fn grouped_collection_renders_optgroups() {
        let model = SampleModel::new("user");
        let options = InputOptions::new()
            .group("Europe", [Choice::new("be", "Belgium"), Choice::new("fr", "France")])
            .group("Asia", [Choice::new("jp", "Japan")]);
        let html = form(&model).input("country", &options);
        assert!(html.as_str().contains(r#"<optgroup label="Europe">"#));
        assert!(html.as_str().contains(r#"<optgroup label="Asia">"#));
        assert!(html.as_str().contains(r#"<option value="jp">Japan</option>"#));
    }

    // ── radio / checkbox collections ─────────────────────────────────

    #[test]
    fn radio_buttons_render_form_checks() {
        let model = SampleModel::new("user").value("role", "editor");
        let options = InputOptions::new()
            .kind(InputKind::RadioButtons)
            .choice("viewer", "Viewer")
            .choice("editor", "Editor");
        let html = form(&model).input("role", &options);
        assert_eq!(html.as_str().matches(r#"<label class="form-check">"#).count(), 2);
        assert!(html.as_str().contains(r#"id="user_role_editor""#));
        assert!(html.as_str().contains(r#"value="editor" class="form-check-input" checked"#));
        assert!(!html.as_str().contains("form-selectgroup"));
    }

    #[test]
    fn check_boxes_use_array_names_and_hidden_marker() {
        let model = SampleModel::new("user");
        let options = InputOptions::new()
            .kind(InputKind::CheckBoxes)
            .choice("rust", "Rust")
            .choice("go", "Go");
        let html = form(&model).input("langs", &options);
        assert!(html.as_str().contains(r#"type="checkbox" name="user[langs][]""#));
        assert!(html.as_str().contains(
            r#"<input type="hidden" name="user[langs][]" value="" autocomplete="off">"#
        ));
    }

    #[test]
    fn selectgroup_styles_collections() {
        let model = SampleModel::new("user");
        let options = InputOptions::new()
            .kind(InputKind::RadioButtons)
            .selectgroup_pills()
            .choice("s", "Small")
            .choice("m", "Medium");
        let html = form(&model).input("size", &options);
        assert!(html.as_str().contains(r#"<div class="form-selectgroup form-selectgroup-pills">"#));
        assert!(html.as_str().contains(r#"class="form-selectgroup-item""#));
        assert!(html.as_str().contains(r#"class="form-selectgroup-input""#));
        assert!(html.as_str().contains(r#"<span class="form-selectgroup-label">Small</span>"#));
    }

    #[test]
    fn selectgroup_buttons_class() {
        let model = SampleModel::new("user");
        let options = InputOptions::new()
            .kind(InputKind::CheckBoxes)
            .selectgroup_buttons()
            .choice("a", "A");
        let html = form(&model).input("opts", &options);
        assert!(html.as_str().contains("form-selectgroup-boxes"));
    }

    // ── color ────────────────────────────────────────────────────────

    #[test]
    fn color_input_uses_default_palette() {
        let model = SampleModel::new("theme").value("accent", "#0ca678");
        let html = form(&model).color_input("accent", &InputOptions::new());
        assert_eq!(html.as_str().matches("form-colorinput-color").count(), DEFAULT_COLORS.len());
        assert!(html.as_str().contains(r#"style="background-color: #206bc4""#));
        assert!(html.as_str().contains(r#"id="theme_accent_0ca678""#));
        assert!(html.as_str().contains(r##"value="#0ca678" class="form-colorinput-input" checked"##));
    }

    #[test]
    fn color_input_accepts_custom_palette() {
        let model = SampleModel::new("theme");
        let html = form(&model).color_input("accent", &InputOptions::new().colors(["#000000", "#ffffff"]));
        assert_eq!(html.as_str().matches("form-colorinput-color").count(), 2);
    }

    // ── imagecheck ───────────────────────────────────────────────────

    #[test]
    fn imagecheck_renders_figures() {
        let model = SampleModel::new("profile");
        let options = InputOptions::new().kind(InputKind::Imagecheck).collection([
            Choice::new("cat", "Cat").image("/img/cat.png"),
            Choice::new("dog", "Dog").image("/img/dog.png"),
        ]);
        let html = form(&model).input("avatar", &options);
        assert!(html.as_str().contains(r#"<div class="form-imagecheck">"#));
        assert!(html.as_str().contains(r#"<figure class="form-imagecheck-figure">"#));
        assert!(html.as_str().contains(r#"<img src="/img/cat.png" alt="Cat" class="form-imagecheck-image">"#));
        assert!(html.as_str().contains(r#"type="radio""#));
        assert!(!html.as_str().contains("form-imagecheck-caption"));
    }

    #[test]
    fn imagecheck_multiple_uses_checkboxes_and_captions() {
        let model = SampleModel::new("profile");
        let options = InputOptions::new()
            .kind(InputKind::Imagecheck)
            .multiple(true)
            .show_text(true)
            .collection([Choice::new("cat", "Cat").image("/img/cat.png")]);
        let html = form(&model).input("avatars", &options);
        assert!(html.as_str().contains(r#"type="checkbox" name="profile[avatars][]""#));
        assert!(html.as_str().contains(r#"<span class="form-imagecheck-caption">Cat</span>"#));
    }

    #[test]
    fn imagecheck_falls_back_to_value_for_image() {
        let model = SampleModel::new("profile");
        let options = InputOptions::new()
            .kind(InputKind::Imagecheck)
            .collection([Choice::new("/img/raw.png", "Raw")]);
        let html = form(&model).input("avatar", &options);
        assert!(html.as_str().contains(r#"src="/img/raw.png""#));
    }

    // ── input group ──────────────────────────────────────────────────

    #[test]
    fn input_group_wraps_affixes() {
        let model = SampleModel::new("site");
        let options = InputOptions::new()
            .kind(InputKind::InputGroup)
            .prepend("https://")
            .append(".example.com");
        let html = form(&model).input("subdomain", &options);
        assert!(html.as_str().contains(r#"<div class="input-group">"#));
        assert!(html.as_str().contains(r#"<span class="input-group-text">https://</span>"#));
        assert!(html.as_str().contains(r#"<span class="input-group-text">.example.com</span>"#));
    }

    #[test]
    fn input_group_buttons_pass_raw_markup() {
        let model = SampleModel::new("site");
        let options = InputOptions::new()
            .kind(InputKind::InputGroup)
            .append_button(r#"<button class="btn" type="button">Go</button>"#);
        let html = form(&model).input("query", &options);
        assert!(html.as_str().contains(r#"<button class="btn" type="button">Go</button>"#));
    }

    // ── floating ─────────────────────────────────────────────────────

    #[test]
    fn floating_input_places_label_after_control() {
        let model = SampleModel::new("user");
        let options = InputOptions::new().kind(InputKind::Floating).label("Full name");
        let html = form(&model).input("name", &options);
        assert!(html.as_str().contains(r#"<div class="form-floating">"#));
        assert!(html.as_str().contains(r#"placeholder="Full name""#));
        let input_at = html.as_str().find("<input").unwrap();
        let label_at = html.as_str().find("<label").unwrap();
        assert!(input_at < label_at);
        assert!(html.as_str().contains(r#"<label for="user_name">Full name</label>"#));
    }

    #[test]
    fn floating_textarea_variant() {
        let model = SampleModel::new("user");
        let options = InputOptions::new().kind(InputKind::Floating).floating_textarea();
        let html = form(&model).input("bio", &options);
        assert!(html.as_str().contains("<textarea"));
    }

    // ── file, label, submit ──────────────────────────────────────────

    #[test]
    fn file_input_has_no_value() {
        let model = SampleModel::new("doc").value("upload", "stale");
        let html = form(&model).file_input("upload", &InputOptions::new());
        assert!(html.as_str().contains(r#"type="file""#));
        assert!(!html.as_str().contains("stale"));
    }

    #[test]
    fn explicit_kind_overrides_collection() {
        let model = SampleModel::new("user");
        let options = InputOptions::new()
            .kind(InputKind::RadioButtons)
            .choice("a", "A");
        let html = form(&model).input("pick", &options);
        assert!(!html.as_str().contains("<select"));
        assert!(html.as_str().contains(r#"type="radio""#));
    }

    #[test]
    fn bare_label_and_submit() {
        let model = SampleModel::new("user");
        let builder = form(&model);
        assert_eq!(
            builder.label("first_name", None).as_str(),
            r#"<label for="user_first_name">First name</label>"#
        );
        assert_eq!(
            builder.submit("Save changes").as_str(),
            r#"<button type="submit" class="btn btn-primary">Save changes</button>"#
        );
    }
}
