//! Utility functions for the profile editor component.
//!
//! - **Bindings**: building the [`FieldBinding`] each wrapper renders from.
//! - **Focus**: moving focus to the first control with an error after a
//!   blocked submit.
//! - **User feedback**: a temporary toast once a submit goes through.
//! - **Dirty flag**: mirroring unsaved edits onto `window.app_dirty`.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use yew::html::Scope;

use common::form::{FieldErrors, FieldPath, FieldValue, FormController};

use super::messages::Msg;
use super::state::ProfileFormComponent;
use crate::components::fields::FieldBinding;

const TOAST_MILLIS: u32 = 3000;

/// Binds `path` of `form` to a wrapper, routing input and blur back through `link`.
///
/// Paths that hold no value of their own fall back to empty text.
pub fn bind(
    form: &FormController,
    link: &Scope<ProfileFormComponent>,
    path: FieldPath,
) -> FieldBinding {
    FieldBinding {
        path,
        value: form
            .value(&path)
            .unwrap_or_else(|| FieldValue::Text(String::new())),
        state: form.field_state(&path),
        on_change: link.callback(move |value| Msg::Change(path, value)),
        on_blur: link.callback(move |_| Msg::Blur(path)),
    }
}

/// First path in page order that has a focusable control.
///
/// The user list root only carries the length error and has no control.
pub fn first_focusable(errors: &FieldErrors) -> Option<FieldPath> {
    errors
        .iter()
        .map(|(path, _)| *path)
        .find(|path| *path != FieldPath::Users)
}

/// Focuses the control whose id is the dotted form of `path`, if it is on the page.
pub fn focus_field(path: &FieldPath) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&path.to_string()))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    if let Some(element) = element {
        element.focus().ok();
    }
}

/// Shows `message` in a `.toast` element appended to the body for three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(toast) = document.create_element("div") else {
        return;
    };

    toast.set_class_name("toast");
    toast.set_attribute("role", "status").ok();
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_err() {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
        toast.remove();
    });
}

/// Sets the global `app_dirty` flag; `index.html` reads it on `beforeunload`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::form::ValidationError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_focusable_skips_user_list_root() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::Users, ValidationError::TooManyUsers { max: 5 });
        errors.insert(FieldPath::UserEmail(3), ValidationError::InvalidEmail);

        assert_eq!(first_focusable(&errors), Some(FieldPath::UserEmail(3)));
    }

    #[test]
    fn test_first_focusable_follows_page_order() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::Status, ValidationError::InvalidStatus);
        errors.insert(FieldPath::Name, ValidationError::NameRequired);

        assert_eq!(first_focusable(&errors), Some(FieldPath::Name));
    }

    #[test]
    fn test_first_focusable_none_when_only_root_fails() {
        let mut errors = FieldErrors::new();
        errors.insert(FieldPath::Users, ValidationError::UsersRequired);

        assert_eq!(first_focusable(&errors), None);
    }
}
