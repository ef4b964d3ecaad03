//! Form configuration.
//!
//! The defaults validate only on submit, then re-validate each field as it
//! changes, and leave the description optional.

use serde::{Deserialize, Serialize};

/// When fields are validated before the first submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnBlur,
    OnChange,
}

/// When fields are re-validated once a submit has been attempted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateMode {
    #[default]
    OnChange,
    OnBlur,
    OnSubmit,
}

/// Whether the description must be filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionRule {
    #[default]
    Optional,
    Required,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    pub mode: ValidationMode,
    pub revalidate_mode: RevalidateMode,
    pub description_rule: DescriptionRule,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options: FormOptions =
            serde_json::from_str(r#"{ "description_rule": "required" }"#).unwrap();

        assert_eq!(options.description_rule, DescriptionRule::Required);
        assert_eq!(options.mode, ValidationMode::OnSubmit);
        assert_eq!(options.revalidate_mode, RevalidateMode::OnChange);
    }
}
