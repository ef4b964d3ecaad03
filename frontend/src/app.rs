use crate::components::profile_form::ProfileFormComponent;
use common::model::submission::ProfileSubmission;
use yew::{html, Callback, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <ProfileFormComponent on_submit={Callback::from(log_submission)} />
            </div>
        }
    }
}

/// Submit sink: writes the validated value to the browser console.
fn log_submission(submission: ProfileSubmission) {
    match serde_json::to_string_pretty(&submission) {
        Ok(json) => gloo_console::log!(json),
        Err(err) => log::error!("could not serialize submission: {err}"),
    }
}
