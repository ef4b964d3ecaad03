//! Raw values held by the profile form controls.
//!
//! These mirror exactly what the user has typed or clicked, before any
//! trimming or validation. [`FormValues::default`] is the state the page loads
//! with and the state it returns to after a successful submit.

use serde::{Deserialize, Serialize};

/// One of the three notification kinds a user can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Sms,
    Push,
}

impl NotificationChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sms => "sms",
            NotificationChannel::Push => "push",
        }
    }

    /// Checkbox label shown next to the control.
    pub fn label(self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email",
            NotificationChannel::Sms => "Sms",
            NotificationChannel::Push => "Push",
        }
    }
}

/// Independent opt-in flags, one per [`NotificationChannel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notifications {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Notifications {
    pub fn get(&self, channel: NotificationChannel) -> bool {
        match channel {
            NotificationChannel::Email => self.email,
            NotificationChannel::Sms => self.sms,
            NotificationChannel::Push => self.push,
        }
    }

    pub fn set(&mut self, channel: NotificationChannel, enabled: bool) {
        match channel {
            NotificationChannel::Email => self.email = enabled,
            NotificationChannel::Sms => self.sms = enabled,
            NotificationChannel::Push => self.push = enabled,
        }
    }
}

/// A single row of the user email list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub email: String,
}

impl UserEntry {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Everything the form controls currently hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    /// `None` until the textarea has been edited at least once.
    pub description: Option<String>,
    /// Raw select value; empty until the user picks a status.
    pub status: String,
    pub notifications: Notifications,
    pub users: Vec<UserEntry>,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            status: String::new(),
            notifications: Notifications::default(),
            users: vec![UserEntry::default()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_with_one_empty_user() {
        let values = FormValues::default();
        assert_eq!(values.users, vec![UserEntry::new("")]);
        assert_eq!(values.status, "");
        assert!(values.description.is_none());
        assert_eq!(values.notifications, Notifications::default());
    }

    #[test]
    fn test_notification_flags_are_independent() {
        let mut notifications = Notifications::default();
        notifications.set(NotificationChannel::Sms, true);

        assert!(notifications.get(NotificationChannel::Sms));
        assert!(!notifications.get(NotificationChannel::Email));
        assert!(!notifications.get(NotificationChannel::Push));
    }
}
