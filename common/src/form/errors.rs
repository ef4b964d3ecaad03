use std::collections::BTreeMap;

use thiserror::Error;

use super::path::FieldPath;

/// A failed schema rule. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required.")]
    NameRequired,
    #[error("description is required.")]
    DescriptionRequired,
    #[error("Please select a valid status.")]
    InvalidStatus,
    #[error("One user is required.")]
    UsersRequired,
    #[error("Maximum users is {max}.")]
    TooManyUsers { max: usize },
    #[error("valid email is required.")]
    InvalidEmail,
}

/// Validation failures keyed by field, at most one per path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<FieldPath, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `path` unless the path already has one.
    /// Returns whether the error was stored.
    pub fn insert(&mut self, path: FieldPath, error: ValidationError) -> bool {
        if self.errors.contains_key(&path) {
            return false;
        }
        self.errors.insert(path, error);
        true
    }

    /// Replaces whatever `path` currently holds.
    pub fn set(&mut self, path: FieldPath, error: Option<ValidationError>) {
        match error {
            Some(error) => {
                self.errors.insert(path, error);
            }
            None => {
                self.errors.remove(&path);
            }
        }
    }

    pub fn get(&self, path: &FieldPath) -> Option<&ValidationError> {
        self.errors.get(path)
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.errors.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &ValidationError)> {
        self.errors.iter()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Rewrites every key through `remap`; keys mapped to `None` are dropped.
    pub(crate) fn remap(&mut self, remap: impl Fn(&FieldPath) -> Option<FieldPath>) {
        let errors = std::mem::take(&mut self.errors);
        self.errors = errors
            .into_iter()
            .filter_map(|(path, error)| remap(&path).map(|path| (path, error)))
            .collect();
    }

    pub(crate) fn retain(&mut self, keep: impl Fn(&FieldPath) -> bool) {
        self.errors.retain(|path, _| keep(path));
    }
}

/// Misuse of the controller API by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{path}` expects a {expected} value")]
    ValueKindMismatch {
        path: FieldPath,
        expected: &'static str,
    },
    #[error("field `{0}` is a group and holds no value of its own")]
    NotAValue(FieldPath),
    #[error("no user row at index {index} ({len} rows)")]
    UserIndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_path_wins() {
        let mut errors = FieldErrors::new();
        assert!(errors.insert(FieldPath::Users, ValidationError::UsersRequired));
        assert!(!errors.insert(FieldPath::Users, ValidationError::TooManyUsers { max: 5 }));
        assert_eq!(
            errors.get(&FieldPath::Users),
            Some(&ValidationError::UsersRequired)
        );
    }

    #[test]
    fn test_messages_match_ui_copy() {
        assert_eq!(ValidationError::NameRequired.to_string(), "name is required.");
        assert_eq!(
            ValidationError::TooManyUsers { max: 5 }.to_string(),
            "Maximum users is 5."
        );
        assert_eq!(ValidationError::UsersRequired.to_string(), "One user is required.");
    }

    #[test]
    fn test_remap_drops_and_moves_keys() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::UserEmail(0), ValidationError::InvalidEmail);
        errors.insert(FieldPath::UserEmail(2), ValidationError::InvalidEmail);
        errors.remap(|path| match path {
            FieldPath::UserEmail(0) => None,
            FieldPath::UserEmail(i) => Some(FieldPath::UserEmail(i - 1)),
            other => Some(*other),
        });

        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&FieldPath::UserEmail(1)));
    }

    #[test]
    fn test_display_counts_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::Name, ValidationError::NameRequired);
        errors.insert(FieldPath::Status, ValidationError::InvalidStatus);
        assert_eq!(errors.to_string(), "2 field(s) failed validation");
    }
}
