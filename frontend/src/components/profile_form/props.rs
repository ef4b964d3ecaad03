//! Defines the properties for the `ProfileFormComponent`.

use common::form::FormOptions;
use common::model::submission::ProfileSubmission;
use yew::prelude::*;

/// Properties for the `ProfileFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ProfileFormProps {
    /// Validation timing and the description rule.
    ///
    /// Changing this after mount discards whatever the user has entered and
    /// starts again from the defaults.
    #[prop_or_default]
    pub options: FormOptions,

    /// Receives the validated value after a successful submit, just before the
    /// form resets itself.
    #[prop_or_default]
    pub on_submit: Callback<ProfileSubmission>,
}
