use common::form::ValidationError;
use yew::{html, Component, Context, Html, Properties};

use super::field_error;

#[derive(Properties, PartialEq)]
pub struct FormFieldSetProps {
    pub legend: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Error that belongs to the group as a whole rather than one control.
    #[prop_or_default]
    pub error: Option<ValidationError>,
    #[prop_or_default]
    pub data_slot: Option<String>,
    #[prop_or_default]
    pub children: Html,
}

/// A labelled group of related fields.
pub struct FormFieldSet;

impl Component for FormFieldSet {
    type Message = ();
    type Properties = FormFieldSetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormFieldSet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <fieldset class="field-set">
                <legend class="field-legend">{ props.legend.clone() }</legend>
                {
                    if let Some(description) = &props.description {
                        html! { <p class="field-description">{ description.clone() }</p> }
                    } else {
                        html! {}
                    }
                }
                { field_error(props.error) }
                <div class="field-group" data-slot={props.data_slot.clone()}>
                    { props.children.clone() }
                </div>
            </fieldset>
        }
    }
}
