//! Validation rules for the profile form.
//!
//! | Field             | Rule                                    |
//! |-------------------|-----------------------------------------|
//! | `name`            | non-empty after trimming                |
//! | `description`     | per [`DescriptionRule`]                 |
//! | `status`          | one of [`Status::ALL`]                  |
//! | `users`           | between [`MIN_USERS`] and [`MAX_USERS`] |
//! | `users.{i}.email` | email syntax, see [`is_valid_email`]    |
//!
//! Notification flags are plain booleans and carry no rule.

use std::sync::LazyLock;

use regex::Regex;

use super::errors::{FieldErrors, ValidationError};
use super::options::DescriptionRule;
use super::path::FieldPath;
use crate::model::profile::FormValues;
use crate::model::status::Status;
use crate::model::submission::ProfileSubmission;

pub const MIN_USERS: usize = 1;
pub const MAX_USERS: usize = 5;

// Leading dots and `..` are rejected separately; the regex crate has no lookaround.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Checks `value` against the email syntax accepted by the user list.
///
/// The value is not trimmed first: `" a@b.com"` is invalid.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSchema {
    pub description_rule: DescriptionRule,
}

impl ProfileSchema {
    pub fn new(description_rule: DescriptionRule) -> Self {
        Self { description_rule }
    }

    /// Runs every rule and either builds the submission or returns all failures.
    pub fn validate(&self, values: &FormValues) -> Result<ProfileSubmission, FieldErrors> {
        let errors = self.collect_errors(values);
        if !errors.is_empty() {
            return Err(errors);
        }

        let status = values.status.parse::<Status>().map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.insert(FieldPath::Status, ValidationError::InvalidStatus);
            errors
        })?;

        Ok(ProfileSubmission {
            name: values.name.trim().to_string(),
            description: values
                .description
                .as_deref()
                .map(|description| description.trim().to_string()),
            status,
            notifications: values.notifications,
            users: values.users.clone(),
        })
    }

    pub fn collect_errors(&self, values: &FormValues) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for path in Self::validated_paths(values) {
            if let Some(error) = self.check(values, &path) {
                errors.insert(path, error);
            }
        }
        errors
    }

    /// Applies the rule for a single path. Paths without a rule, and user rows
    /// that do not exist, always pass.
    pub fn check(&self, values: &FormValues, path: &FieldPath) -> Option<ValidationError> {
        match path {
            FieldPath::Name => values
                .name
                .trim()
                .is_empty()
                .then_some(ValidationError::NameRequired),
            FieldPath::Description => self.check_description(values.description.as_deref()),
            FieldPath::Status => values
                .status
                .parse::<Status>()
                .is_err()
                .then_some(ValidationError::InvalidStatus),
            FieldPath::Notification(_) => None,
            FieldPath::Users => {
                let len = values.users.len();
                if len < MIN_USERS {
                    Some(ValidationError::UsersRequired)
                } else if len > MAX_USERS {
                    Some(ValidationError::TooManyUsers { max: MAX_USERS })
                } else {
                    None
                }
            }
            FieldPath::UserEmail(index) => values
                .users
                .get(*index)
                .filter(|user| !is_valid_email(&user.email))
                .map(|_| ValidationError::InvalidEmail),
        }
    }

    fn check_description(&self, description: Option<&str>) -> Option<ValidationError> {
        match self.description_rule {
            DescriptionRule::Optional => None,
            DescriptionRule::Required => description
                .map(str::trim)
                .is_none_or(str::is_empty)
                .then_some(ValidationError::DescriptionRequired),
        }
    }

    fn validated_paths(values: &FormValues) -> impl Iterator<Item = FieldPath> {
        [
            FieldPath::Name,
            FieldPath::Description,
            FieldPath::Status,
            FieldPath::Users,
        ]
        .into_iter()
        .chain((0..values.users.len()).map(FieldPath::UserEmail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::{Notifications, UserEntry};
    use pretty_assertions::assert_eq;

    fn valid_values() -> FormValues {
        FormValues {
            name: "Jane".to_string(),
            description: None,
            status: "draft".to_string(),
            notifications: Notifications {
                email: true,
                sms: false,
                push: false,
            },
            users: vec![UserEntry::new("a@b.com")],
        }
    }

    mod email_syntax {
        use super::*;

        #[test]
        fn test_accepts_common_addresses() {
            for email in ["a@b.com", "jane.doe+news@mail.example.org", "o'neil@x.io", "a_b-c@d-e.co"] {
                assert!(is_valid_email(email), "{email} should be valid");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in [
                "",
                "not-an-email",
                "a@b",
                "a@b.c",
                ".a@b.com",
                "a..b@c.com",
                "a.@b.com",
                "a@-b.com",
                "a@b..com",
                " a@b.com",
                "a@b.com ",
                "a b@c.com",
            ] {
                assert!(!is_valid_email(email), "{email:?} should be invalid");
            }
        }
    }

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_values_produce_submission() {
            let submission = ProfileSchema::default().validate(&valid_values()).unwrap();

            assert_eq!(
                submission,
                ProfileSubmission {
                    name: "Jane".to_string(),
                    description: None,
                    status: Status::Draft,
                    notifications: Notifications {
                        email: true,
                        sms: false,
                        push: false,
                    },
                    users: vec![UserEntry::new("a@b.com")],
                }
            );
        }

        #[test]
        fn test_whitespace_name_is_required() {
            let mut values = valid_values();
            values.name = "   ".to_string();

            let errors = ProfileSchema::default().validate(&values).unwrap_err();
            assert_eq!(errors.get(&FieldPath::Name), Some(&ValidationError::NameRequired));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_output_is_trimmed() {
            let mut values = valid_values();
            values.name = "  Jane Doe ".to_string();
            values.description = Some("\tLikes Rust\n".to_string());

            let submission = ProfileSchema::default().validate(&values).unwrap();
            assert_eq!(submission.name, "Jane Doe");
            assert_eq!(submission.description.as_deref(), Some("Likes Rust"));
        }

        #[test]
        fn test_unlisted_status_is_rejected() {
            let mut values = valid_values();
            values.status = "deleted".to_string();

            let errors = ProfileSchema::default().validate(&values).unwrap_err();
            assert_eq!(errors.get(&FieldPath::Status), Some(&ValidationError::InvalidStatus));
        }

        #[test]
        fn test_user_count_bounds() {
            let schema = ProfileSchema::default();

            let mut values = valid_values();
            values.users.clear();
            let errors = schema.validate(&values).unwrap_err();
            assert_eq!(errors.get(&FieldPath::Users), Some(&ValidationError::UsersRequired));

            values.users = vec![UserEntry::new("a@b.com"); MAX_USERS];
            assert!(schema.validate(&values).is_ok());

            values.users.push(UserEntry::new("a@b.com"));
            let errors = schema.validate(&values).unwrap_err();
            assert_eq!(
                errors.get(&FieldPath::Users).map(ToString::to_string).as_deref(),
                Some("Maximum users is 5.")
            );
        }

        #[test]
        fn test_every_failure_is_collected() {
            let values = FormValues {
                users: vec![UserEntry::new("a@b.com"), UserEntry::new("nope")],
                ..FormValues::default()
            };

            let errors = ProfileSchema::default().validate(&values).unwrap_err();
            let paths: Vec<FieldPath> = errors.iter().map(|(path, _)| *path).collect();
            assert_eq!(
                paths,
                vec![FieldPath::Name, FieldPath::Status, FieldPath::UserEmail(1)]
            );
        }

        #[test]
        fn test_description_rule() {
            let mut values = valid_values();
            let required = ProfileSchema::new(DescriptionRule::Required);

            assert!(ProfileSchema::default().validate(&values).is_ok());
            assert_eq!(
                required.check(&values, &FieldPath::Description),
                Some(ValidationError::DescriptionRequired)
            );

            values.description = Some("  ".to_string());
            assert!(required.validate(&values).is_err());

            values.description = Some("About me".to_string());
            assert!(required.validate(&values).is_ok());
        }

        #[test]
        fn test_missing_user_row_passes_check() {
            let values = valid_values();
            assert_eq!(
                ProfileSchema::default().check(&values, &FieldPath::UserEmail(7)),
                None
            );
        }
    }
}
