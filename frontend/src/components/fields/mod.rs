//! Presentational wrappers that bind one form field to one control.
//!
//! Each wrapper takes a [`FieldBinding`] (value, validation state and the two
//! callbacks that feed input back to the form) plus its label copy, and
//! renders through [`FormBase`] so label, description and error placement are
//! the same everywhere.

mod binding;
mod checkbox_input;
mod form_base;
mod form_field_set;
mod select_input;
mod text_input;
mod textarea_input;

pub use binding::FieldBinding;
pub use checkbox_input::CheckboxInput;
pub use form_base::{field_error, FormBase};
pub use form_field_set::FormFieldSet;
pub use select_input::SelectInput;
pub use text_input::TextInput;
pub use textarea_input::TextareaInput;
