//! View rendering for the profile editor component.
//!
//! Top to bottom: name, description, status, the notification checkboxes,
//! the user email list and the submit button. Every control is bound through
//! `helpers::bind`, so its id is the dotted field path and its error comes
//! straight from the form controller.

use common::form::{FieldPath, FieldValue, UserRow};
use common::model::profile::NotificationChannel;
use common::model::status::Status;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::bind;
use super::messages::Msg;
use super::state::ProfileFormComponent;
use crate::components::fields::{
    field_error, CheckboxInput, FormFieldSet, SelectInput, TextInput, TextareaInput,
};
use crate::components::form_page::FormPage;

/// Checkbox order on the page.
const NOTIFICATION_CHANNELS: [NotificationChannel; 3] = [
    NotificationChannel::Email,
    NotificationChannel::Push,
    NotificationChannel::Sms,
];

pub fn view(component: &ProfileFormComponent, ctx: &Context<ProfileFormComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <FormPage>
            <form {onsubmit}>
                <div class="field-group">
                    { build_text_fields(component, link) }
                    { build_notifications(component, link) }
                    { build_users(component, link) }
                    <button type="submit" class="btn">{ "Submit" }</button>
                </div>
            </form>
        </FormPage>
    }
}

fn build_text_fields(component: &ProfileFormComponent, link: &Scope<ProfileFormComponent>) -> Html {
    let form = &component.form;
    let statuses: Vec<String> = Status::ALL
        .iter()
        .map(|status| status.as_str().to_string())
        .collect();

    html! {
        <>
            <TextInput
                binding={bind(form, link, FieldPath::Name)}
                label="Name"
                description={Some("Enter your full name as you would like it displayed".to_string())}
            />
            <TextareaInput
                binding={bind(form, link, FieldPath::Description)}
                label="Description"
                description={Some("Please provide a description of yourself".to_string())}
            />
            <SelectInput
                binding={bind(form, link, FieldPath::Status)}
                label="Status"
                description={Some("Select the current status of your post".to_string())}
                placeholder={Some("Pick a status".to_string())}
                items={statuses}
            />
        </>
    }
}

fn build_notifications(component: &ProfileFormComponent, link: &Scope<ProfileFormComponent>) -> Html {
    html! {
        <FormFieldSet
            legend="Notifications"
            description={Some("Select the types of notifications you wish to receive about comments and post updates.".to_string())}
            data_slot={Some("checkbox-group".to_string())}
        >
            { for NOTIFICATION_CHANNELS.iter().map(|channel| html! {
                <CheckboxInput
                    binding={bind(&component.form, link, FieldPath::Notification(*channel))}
                    label={channel.label()}
                />
            }) }
        </FormFieldSet>
    }
}

/// The repeatable email list with its "Add More" button and per-row remove buttons.
/// The list-level error (too few or too many rows) sits above the rows.
fn build_users(component: &ProfileFormComponent, link: &Scope<ProfileFormComponent>) -> Html {
    let root_error = component.form.field_state(&FieldPath::Users).error;

    html! {
        <FormFieldSet
            legend="User Email Addresses"
            description={Some("Use \"Add User\" to include more emails, or remove existing ones as needed.".to_string())}
            error={root_error}
        >
            <div class="user-list">
                <button
                    type="button"
                    class="btn btn-end"
                    onclick={link.callback(|_| Msg::AddUser)}
                >
                    { "Add More" }
                </button>
                <div class="field-group">
                    { for component.form.user_rows().map(|row| build_user_row(component, link, row)) }
                </div>
            </div>
        </FormFieldSet>
    }
}

fn build_user_row(
    component: &ProfileFormComponent,
    link: &Scope<ProfileFormComponent>,
    row: UserRow<'_>,
) -> Html {
    let index = row.index;
    let binding = bind(&component.form, link, FieldPath::UserEmail(index));

    let oninput = {
        let on_change = binding.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(FieldValue::Text(input.value()));
        })
    };
    let onblur = binding.on_blur.reform(|_: FocusEvent| ());

    html! {
        <div
            key={row.key.to_string()}
            class="field field-vertical"
            data-invalid={binding.state.invalid.to_string()}
        >
            <div class="input-group">
                <input
                    class="input"
                    type="text"
                    inputmode="email"
                    id={binding.id()}
                    name={binding.id()}
                    autocomplete="on"
                    aria-label={format!("User email {}", index + 1)}
                    value={row.entry.email.clone()}
                    aria-invalid={binding.aria_invalid()}
                    {oninput}
                    {onblur}
                />
                <button
                    type="button"
                    class="btn btn-ghost"
                    aria-label={format!("Remove user {}", index + 1)}
                    onclick={link.callback(move |_| Msg::RemoveUser(index))}
                >
                    { "✕" }
                </button>
            </div>
            { field_error(binding.state.error) }
        </div>
    }
}
