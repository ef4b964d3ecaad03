use serde::{Deserialize, Serialize};

use super::profile::{Notifications, UserEntry};
use super::status::Status;

/// The validated value handed to the submit handler.
///
/// Produced only by [`ProfileSchema::validate`](crate::form::schema::ProfileSchema::validate),
/// so every instance already satisfies the schema: `name` is trimmed and
/// non-empty, `status` is a known variant, and `users` holds between one and
/// five syntactically valid emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: Status,
    pub notifications: Notifications,
    pub users: Vec<UserEntry>,
}
