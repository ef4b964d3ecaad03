//! Dotted field paths such as `users.2.email`.
//!
//! The dotted form doubles as the DOM id of the bound control, so a label's
//! `for` attribute and the control's `id` always agree.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::profile::NotificationChannel;

/// One independently validated unit of the form.
///
/// Ordering follows the page layout, which keeps [`FieldErrors`](super::FieldErrors)
/// iteration in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    Name,
    Description,
    Status,
    Notification(NotificationChannel),
    /// The user list as a whole; carries the length errors.
    Users,
    UserEmail(usize),
}

impl FieldPath {
    /// Index of the user row this path points into, if any.
    pub fn user_index(&self) -> Option<usize> {
        match self {
            FieldPath::UserEmail(index) => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => f.write_str("name"),
            FieldPath::Description => f.write_str("description"),
            FieldPath::Status => f.write_str("status"),
            FieldPath::Notification(channel) => write!(f, "notifications.{}", channel.as_str()),
            FieldPath::Users => f.write_str("users"),
            FieldPath::UserEmail(index) => write!(f, "users.{index}.email"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field path `{0}`")]
pub struct PathParseError(pub String);

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        let path = match segments.as_slice() {
            ["name"] => FieldPath::Name,
            ["description"] => FieldPath::Description,
            ["status"] => FieldPath::Status,
            ["notifications", "email"] => FieldPath::Notification(NotificationChannel::Email),
            ["notifications", "sms"] => FieldPath::Notification(NotificationChannel::Sms),
            ["notifications", "push"] => FieldPath::Notification(NotificationChannel::Push),
            ["users"] => FieldPath::Users,
            ["users", index, "email"] => {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| PathParseError(s.to_string()))?;
                FieldPath::UserEmail(index)
            }
            _ => return Err(PathParseError(s.to_string())),
        };
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_dotted_form() {
        assert_eq!(FieldPath::Name.to_string(), "name");
        assert_eq!(
            FieldPath::Notification(NotificationChannel::Push).to_string(),
            "notifications.push"
        );
        assert_eq!(FieldPath::UserEmail(3).to_string(), "users.3.email");
    }

    #[test]
    fn test_parses_dotted_form() {
        assert_eq!("users.0.email".parse(), Ok(FieldPath::UserEmail(0)));
        assert_eq!(
            "notifications.sms".parse(),
            Ok(FieldPath::Notification(NotificationChannel::Sms))
        );
        assert_eq!("users".parse(), Ok(FieldPath::Users));
    }

    #[test]
    fn test_rejects_unknown_paths() {
        assert!("users.x.email".parse::<FieldPath>().is_err());
        assert!("users.0".parse::<FieldPath>().is_err());
        assert!("notifications.fax".parse::<FieldPath>().is_err());
        assert!("".parse::<FieldPath>().is_err());
    }

    #[test]
    fn test_orders_by_page_layout() {
        let mut paths = vec![
            FieldPath::UserEmail(1),
            FieldPath::Users,
            FieldPath::Status,
            FieldPath::UserEmail(0),
            FieldPath::Name,
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                FieldPath::Name,
                FieldPath::Status,
                FieldPath::Users,
                FieldPath::UserEmail(0),
                FieldPath::UserEmail(1),
            ]
        );
    }
}
