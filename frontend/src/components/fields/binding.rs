use common::form::{FieldPath, FieldState, FieldValue};
use yew::Callback;

/// Everything a wrapper needs to drive one control.
#[derive(Clone, PartialEq)]
pub struct FieldBinding {
    pub path: FieldPath,
    pub value: FieldValue,
    pub state: FieldState,
    pub on_change: Callback<FieldValue>,
    pub on_blur: Callback<()>,
}

impl FieldBinding {
    /// DOM id of the control, shared with the label's `for`.
    pub fn id(&self) -> String {
        self.path.to_string()
    }

    pub fn text(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    pub fn aria_invalid(&self) -> &'static str {
        if self.state.invalid {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::profile::NotificationChannel;
    use pretty_assertions::assert_eq;

    fn binding(path: FieldPath, value: FieldValue) -> FieldBinding {
        FieldBinding {
            path,
            value,
            state: FieldState::default(),
            on_change: Callback::noop(),
            on_blur: Callback::noop(),
        }
    }

    #[test]
    fn test_id_matches_dotted_path() {
        let b = binding(FieldPath::UserEmail(2), FieldValue::Text(String::new()));
        assert_eq!(b.id(), "users.2.email");
    }

    #[test]
    fn test_text_and_flag_accessors() {
        let text = binding(FieldPath::Name, FieldValue::Text("Jane".to_string()));
        assert_eq!(text.text(), "Jane");
        assert!(!text.flag());

        let flag = binding(
            FieldPath::Notification(NotificationChannel::Email),
            FieldValue::Flag(true),
        );
        assert!(flag.flag());
        assert_eq!(flag.text(), "");
    }
}
