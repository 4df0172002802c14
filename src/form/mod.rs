//! Model-bound form rendering.
//!
//! [`FormBuilder`] turns a [`FormModel`] plus per-field [`InputOptions`]
//! into Tabler form groups: label, control, hint and validation feedback in
//! one fragment. Thirteen strategies cover text, numbers, dates, booleans,
//! selects, radio/checkbox collections, color swatches, image checks,
//! input groups and floating labels.
//!
//! ```
//! use tabler_kit::form::{FormBuilder, FormModel, InputOptions};
//!
//! struct Account;
//!
//! impl FormModel for Account {
//!     fn model_name(&self) -> &str {
//!         "account"
//!     }
//! }
//!
//! let form = FormBuilder::new(&Account);
//! let field = form.input("email", &InputOptions::new().hint("Work address."));
//! assert!(field.as_str().contains("form-hint"));
//! ```

pub mod builder;
pub mod model;
pub mod options;

pub use builder::{humanize, FormBuilder, DEFAULT_COLORS};
pub use model::{AttributeType, FormModel};
pub use options::{Choice, FloatingKind, InputKind, InputOptions, LabelMode};
