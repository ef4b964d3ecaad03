//! Update function for the profile editor component.
//!
//! Elm-style: receives the current state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field input and blur are forwarded to the form controller.
//! - Add/remove operate on the user email list.
//! - Submit validates; success goes to the `on_submit` prop and resets the
//!   form, failure moves focus to the first invalid control.

use log::{debug, warn};
use yew::prelude::*;

use common::model::profile::UserEntry;

use super::helpers::{first_focusable, focus_field, set_window_dirty_flag, show_toast};
use super::messages::Msg;
use super::state::ProfileFormComponent;

pub fn update(
    component: &mut ProfileFormComponent,
    ctx: &Context<ProfileFormComponent>,
    msg: Msg,
) -> bool {
    let render = match msg {
        Msg::Change(path, value) => match component.form.set_value(path, value) {
            Ok(()) => true,
            Err(err) => {
                warn!("ignoring input: {err}");
                false
            }
        },
        Msg::Blur(path) => {
            let before = component.form.field_state(&path);
            component.form.blur(path);
            component.form.field_state(&path) != before
        }
        Msg::AddUser => {
            component.form.append_user(UserEntry::default());
            true
        }
        Msg::RemoveUser(index) => match component.form.remove_user(index) {
            Ok(_) => true,
            Err(err) => {
                warn!("ignoring remove: {err}");
                false
            }
        },
        Msg::Submit => {
            match component.form.handle_submit() {
                Ok(submission) => {
                    ctx.props().on_submit.emit(submission);
                    show_toast("Form submitted.");
                }
                Err(errors) => {
                    debug!("submit blocked, {errors}");
                    if let Some(path) = first_focusable(&errors) {
                        focus_field(&path);
                    }
                }
            }
            true
        }
    };

    set_window_dirty_flag(component.form.form_state().is_dirty);
    render
}
