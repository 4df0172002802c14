//! The data-model side of the form builder.
//!
//! [`FormModel`] is the seam between the builder and whatever holds the
//! data being edited: an ORM record, a deserialized config struct, or a
//! plain in-memory map. The builder only ever asks four questions — the
//! model's name, an attribute's declared type, its current value, and its
//! validation errors.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AttributeType
// ---------------------------------------------------------------------------

/// Declared type of a model attribute.
///
/// Drives control selection: numbers get a number input, dates get a
/// datepicker, booleans a checkbox, long text a textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    String,
    Text,
    Integer,
    Float,
    Decimal,
    Date,
    DateTime,
    Boolean,
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Text => "text",
            AttributeType::Integer => "integer",
            AttributeType::Float => "float",
            AttributeType::Decimal => "decimal",
            AttributeType::Date => "date",
            AttributeType::DateTime => "datetime",
            AttributeType::Boolean => "boolean",
        }
    }

    /// Whether the type renders as a numeric input.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            AttributeType::Integer | AttributeType::Float | AttributeType::Decimal
        )
    }
}

// ---------------------------------------------------------------------------
// FormModel
// ---------------------------------------------------------------------------

/// The object a form edits.
///
/// Everything except [`model_name`](FormModel::model_name) has a default:
/// untyped attributes are strings with no value and no errors, so a minimal
/// model only names itself.
///
/// # Examples
///
/// ```
/// use tabler_kit::form::FormModel;
///
/// struct Signup;
///
/// impl FormModel for Signup {
///     fn model_name(&self) -> &str {
///         "signup"
///     }
/// }
///
/// assert_eq!(Signup.attribute_value("email"), None);
/// ```
pub trait FormModel {
    /// Parameter scope for field names: a model named `user` produces
    /// `name="user[email]"` and `id="user_email"`.
    fn model_name(&self) -> &str;

    /// Declared type of an attribute.
    fn attribute_type(&self, _attribute: &str) -> AttributeType {
        AttributeType::String
    }

    /// Current value, rendered into the control.
    fn attribute_value(&self, _attribute: &str) -> Option<String> {
        None
    }

    /// Validation messages for an attribute.
    fn errors_on(&self, _attribute: &str) -> Vec<String> {
        Vec::new()
    }

    /// Whether the attribute currently fails validation.
    fn has_errors(&self, attribute: &str) -> bool {
        !self.errors_on(attribute).is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
