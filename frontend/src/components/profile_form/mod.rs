//! Profile editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ProfileFormProps`, `ProfileFormComponent`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Rebuild the form controller when the parent swaps `options`.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProfileFormProps;
pub use state::ProfileFormComponent;

impl Component for ProfileFormComponent {
    type Message = Msg;
    type Properties = ProfileFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProfileFormComponent::new(ctx.props().options)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().options != old_props.options {
            log::debug!("form options changed, starting over");
            *self = ProfileFormComponent::new(ctx.props().options);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
