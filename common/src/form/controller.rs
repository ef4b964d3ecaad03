//! The stateful form the UI binds to.
//!
//! `FormController` owns the current [`FormValues`] together with the error,
//! touched and submit bookkeeping. The view reads [`FieldState`] per control
//! and feeds user input back through [`FormController::set_value`],
//! [`FormController::blur`] and the user list operations.
//!
//! Validation timing follows [`FormOptions`]: before the first submit attempt
//! fields are checked according to `mode`, afterwards according to
//! `revalidate_mode`. A submit always checks everything.

use std::collections::BTreeSet;

use log::debug;

use super::errors::{FieldErrors, FormError, ValidationError};
use super::field_array::{UserFieldArray, shift_after_removal};
use super::options::{FormOptions, RevalidateMode, ValidationMode};
use super::path::FieldPath;
use super::schema::ProfileSchema;
use crate::model::profile::{FormValues, UserEntry};
use crate::model::submission::ProfileSubmission;

/// A value travelling from a control into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// What a single control needs to render itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub invalid: bool,
    pub error: Option<ValidationError>,
    /// Value differs from its default.
    pub is_dirty: bool,
    /// Control has lost focus at least once.
    pub is_touched: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormState {
    pub is_dirty: bool,
    pub is_submitted: bool,
    pub is_submit_successful: bool,
    pub submit_count: u32,
    pub is_valid: bool,
}

/// One row of the user email list as the view iterates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRow<'a> {
    /// Stable across re-indexing; use it as the list item key.
    pub key: &'a str,
    pub index: usize,
    pub entry: &'a UserEntry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Change,
    Blur,
}

#[derive(Debug, Clone)]
pub struct FormController {
    options: FormOptions,
    schema: ProfileSchema,
    defaults: FormValues,
    values: FormValues,
    rows: UserFieldArray,
    errors: FieldErrors,
    touched: BTreeSet<FieldPath>,
    submit_count: u32,
    is_submit_successful: bool,
}

impl FormController {
    pub fn new(options: FormOptions) -> Self {
        Self::with_defaults(options, FormValues::default())
    }

    /// Starts from `defaults` instead of [`FormValues::default`]; `reset`
    /// returns to the same values.
    pub fn with_defaults(options: FormOptions, defaults: FormValues) -> Self {
        Self {
            options,
            schema: ProfileSchema::new(options.description_rule),
            rows: UserFieldArray::with_len(defaults.users.len()),
            values: defaults.clone(),
            defaults,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submit_count: 0,
            is_submit_successful: false,
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn default_values(&self) -> &FormValues {
        &self.defaults
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current value bound to `path`. `None` for the user list root and for
    /// rows that do not exist.
    pub fn value(&self, path: &FieldPath) -> Option<FieldValue> {
        match path {
            FieldPath::Name => Some(FieldValue::Text(self.values.name.clone())),
            FieldPath::Description => Some(FieldValue::Text(
                self.values.description.clone().unwrap_or_default(),
            )),
            FieldPath::Status => Some(FieldValue::Text(self.values.status.clone())),
            FieldPath::Notification(channel) => {
                Some(FieldValue::Flag(self.values.notifications.get(*channel)))
            }
            FieldPath::Users => None,
            FieldPath::UserEmail(index) => self
                .values
                .users
                .get(*index)
                .map(|user| FieldValue::Text(user.email.clone())),
        }
    }

    pub fn set_value(&mut self, path: FieldPath, value: FieldValue) -> Result<(), FormError> {
        match (path, value) {
            (FieldPath::Users, _) => return Err(FormError::NotAValue(path)),
            (FieldPath::Name, FieldValue::Text(text)) => self.values.name = text,
            (FieldPath::Description, FieldValue::Text(text)) => {
                self.values.description = Some(text)
            }
            (FieldPath::Status, FieldValue::Text(text)) => self.values.status = text,
            (FieldPath::Notification(channel), FieldValue::Flag(enabled)) => {
                self.values.notifications.set(channel, enabled)
            }
            (FieldPath::UserEmail(index), FieldValue::Text(text)) => {
                let len = self.values.users.len();
                let user = self
                    .values
                    .users
                    .get_mut(index)
                    .ok_or(FormError::UserIndexOutOfRange { index, len })?;
                user.email = text;
            }
            (FieldPath::Notification(_), FieldValue::Text(_)) => {
                return Err(FormError::ValueKindMismatch {
                    path,
                    expected: "boolean",
                });
            }
            (_, FieldValue::Flag(_)) => {
                return Err(FormError::ValueKindMismatch {
                    path,
                    expected: "text",
                });
            }
        }

        if self.validates_on(Trigger::Change) {
            self.revalidate(path);
        }
        Ok(())
    }

    /// Marks `path` as touched.
    pub fn blur(&mut self, path: FieldPath) {
        self.touched.insert(path);
        if self.validates_on(Trigger::Blur) {
            self.revalidate(path);
        }
    }

    /// Validates `path` right away regardless of the configured timing and
    /// returns whether it passed. For [`FieldPath::Users`] every row counts too.
    pub fn trigger(&mut self, path: FieldPath) -> bool {
        self.revalidate(path);
        match path {
            FieldPath::Users => !self
                .errors
                .iter()
                .any(|(path, _)| *path == FieldPath::Users || path.user_index().is_some()),
            path => !self.errors.contains(&path),
        }
    }

    pub fn field_state(&self, path: &FieldPath) -> FieldState {
        let error = self.errors.get(path).copied();
        FieldState {
            invalid: error.is_some(),
            error,
            is_dirty: self.is_path_dirty(path),
            is_touched: self.touched.contains(path),
        }
    }

    pub fn form_state(&self) -> FormState {
        FormState {
            is_dirty: self.is_form_dirty(),
            is_submitted: self.submit_count > 0,
            is_submit_successful: self.is_submit_successful,
            submit_count: self.submit_count,
            is_valid: self.errors.is_empty(),
        }
    }

    pub fn user_rows(&self) -> impl Iterator<Item = UserRow<'_>> {
        self.rows
            .keys()
            .iter()
            .zip(&self.values.users)
            .enumerate()
            .map(|(index, (key, entry))| UserRow {
                key: key.as_str(),
                index,
                entry,
            })
    }

    /// Adds a row at the end of the user list and returns its key.
    ///
    /// The upper bound is not enforced here; a sixth row is accepted and only
    /// reported by validation.
    pub fn append_user(&mut self, entry: UserEntry) -> String {
        self.values.users.push(entry);
        let key = self.rows.append().to_string();
        debug!("appended user row, {} total", self.values.users.len());

        if self.revalidates_array() {
            self.revalidate_users();
        }
        key
    }

    /// Removes the row at `index`; rows after it move up by one together with
    /// their errors and touched flags.
    pub fn remove_user(&mut self, index: usize) -> Result<UserEntry, FormError> {
        let len = self.values.users.len();
        if index >= len {
            return Err(FormError::UserIndexOutOfRange { index, len });
        }

        let removed = self.values.users.remove(index);
        self.rows.remove(index);
        self.errors.remap(|path| shift_after_removal(path, index));
        self.touched = std::mem::take(&mut self.touched)
            .into_iter()
            .filter_map(|path| shift_after_removal(&path, index))
            .collect();
        debug!("removed user row {index}, {} left", self.values.users.len());

        if self.revalidates_array() {
            self.revalidate_users();
        }
        Ok(removed)
    }

    /// Validates everything.
    ///
    /// On success the form is reset to its defaults and the validated value is
    /// returned for the caller to hand on. On failure the values are left as
    /// they are and the errors are stored for display.
    pub fn handle_submit(&mut self) -> Result<ProfileSubmission, FieldErrors> {
        self.submit_count += 1;
        match self.schema.validate(&self.values) {
            Ok(submission) => {
                debug!("submit accepted after {} attempt(s)", self.submit_count);
                self.reset();
                self.is_submit_successful = true;
                Ok(submission)
            }
            Err(errors) => {
                debug!("submit blocked: {errors}");
                self.is_submit_successful = false;
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Puts every field back to its default and clears all bookkeeping.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.rows = UserFieldArray::with_len(self.defaults.users.len());
        self.errors.clear();
        self.touched.clear();
        self.submit_count = 0;
        self.is_submit_successful = false;
    }

    fn validates_on(&self, trigger: Trigger) -> bool {
        if self.submit_count > 0 {
            matches!(
                (self.options.revalidate_mode, trigger),
                (RevalidateMode::OnChange, Trigger::Change) | (RevalidateMode::OnBlur, Trigger::Blur)
            )
        } else {
            matches!(
                (self.options.mode, trigger),
                (ValidationMode::OnChange, Trigger::Change) | (ValidationMode::OnBlur, Trigger::Blur)
            )
        }
    }

    /// The user list root has no control and never sees a blur, so array
    /// operations count as input for every mode except submit-only.
    fn revalidates_array(&self) -> bool {
        if self.submit_count > 0 {
            self.options.revalidate_mode != RevalidateMode::OnSubmit
        } else {
            self.options.mode != ValidationMode::OnSubmit
        }
    }

    fn revalidate(&mut self, path: FieldPath) {
        match path {
            FieldPath::Users => self.revalidate_users(),
            path => {
                let error = self.schema.check(&self.values, &path);
                self.errors.set(path, error);
            }
        }
    }

    fn revalidate_users(&mut self) {
        self.errors.retain(|path| path.user_index().is_none());
        let root = self.schema.check(&self.values, &FieldPath::Users);
        self.errors.set(FieldPath::Users, root);

        for index in 0..self.values.users.len() {
            let path = FieldPath::UserEmail(index);
            if let Some(error) = self.schema.check(&self.values, &path) {
                self.errors.insert(path, error);
            }
        }
    }

    fn is_path_dirty(&self, path: &FieldPath) -> bool {
        let (values, defaults) = (&self.values, &self.defaults);
        match path {
            FieldPath::Name => values.name != defaults.name,
            FieldPath::Description => {
                values.description.as_deref().unwrap_or_default()
                    != defaults.description.as_deref().unwrap_or_default()
            }
            FieldPath::Status => values.status != defaults.status,
            FieldPath::Notification(channel) => {
                values.notifications.get(*channel) != defaults.notifications.get(*channel)
            }
            FieldPath::Users => values.users != defaults.users,
            FieldPath::UserEmail(index) => {
                values.users.get(*index).map(|user| user.email.as_str())
                    != defaults.users.get(*index).map(|user| user.email.as_str())
            }
        }
    }

    fn is_form_dirty(&self) -> bool {
        [FieldPath::Name, FieldPath::Description, FieldPath::Status, FieldPath::Users]
            .iter()
            .any(|path| self.is_path_dirty(path))
            || self.values.notifications != self.defaults.notifications
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}
