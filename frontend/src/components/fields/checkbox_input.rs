use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::form::FieldValue;

use super::{FieldBinding, FormBase};

#[derive(Properties, PartialEq)]
pub struct CheckboxInputProps {
    pub binding: FieldBinding,
    pub label: String,
}

pub struct CheckboxInput;

impl Component for CheckboxInput {
    type Message = ();
    type Properties = CheckboxInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CheckboxInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let binding = &props.binding;

        let onchange = {
            let on_change = binding.on_change.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(FieldValue::Flag(input.checked()));
            })
        };
        let onblur = binding.on_blur.reform(|_: FocusEvent| ());

        html! {
            <FormBase
                name={binding.path}
                label={props.label.clone()}
                state={binding.state}
                is_checkbox=true
            >
                <input
                    type="checkbox"
                    id={binding.id()}
                    name={binding.id()}
                    checked={binding.flag()}
                    aria-invalid={binding.aria_invalid()}
                    {onchange}
                    {onblur}
                />
            </FormBase>
        }
    }
}
