//! Component state for the profile editor.

use common::form::{FormController, FormOptions};

/// Main state container for the `ProfileFormComponent`.
///
/// All field values and validation bookkeeping live in the controller; the
/// component only adds what the DOM needs on top.
pub struct ProfileFormComponent {
    pub form: FormController,
}

impl ProfileFormComponent {
    pub fn new(options: FormOptions) -> Self {
        Self {
            form: FormController::new(options),
        }
    }
}
