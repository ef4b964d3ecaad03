//! Form state management for the profile editor.
//!
//! - `path`: names of the independently validated fields.
//! - `schema`: the validation rules and the email syntax check.
//! - `errors`: per-field validation messages and controller errors.
//! - `options`: when validation runs and which description rule applies.
//! - `field_array`: stable row keys for the user email list.
//! - `controller`: the stateful form that the UI binds to.

pub mod controller;
pub mod errors;
pub mod field_array;
pub mod options;
pub mod path;
pub mod schema;

pub use controller::{FieldState, FieldValue, FormController, FormState, UserRow};
pub use errors::{FieldErrors, FormError, ValidationError};
pub use options::{DescriptionRule, FormOptions, RevalidateMode, ValidationMode};
pub use path::{FieldPath, PathParseError};
pub use schema::{MAX_USERS, MIN_USERS, ProfileSchema};
