use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::form::FieldValue;

use super::{FieldBinding, FormBase};

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub binding: FieldBinding,
    pub label: String,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
}

pub struct TextInput;

impl Component for TextInput {
    type Message = ();
    type Properties = TextInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TextInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let binding = &props.binding;

        let oninput = {
            let on_change = binding.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(FieldValue::Text(input.value()));
            })
        };
        let onblur = binding.on_blur.reform(|_: FocusEvent| ());

        html! {
            <FormBase
                name={binding.path}
                label={props.label.clone()}
                description={props.description.clone()}
                state={binding.state}
            >
                <input
                    class="input"
                    type="text"
                    id={binding.id()}
                    name={binding.id()}
                    autocomplete="on"
                    placeholder={props.placeholder.clone()}
                    value={binding.text().to_string()}
                    aria-invalid={binding.aria_invalid()}
                    {oninput}
                    {onblur}
                />
            </FormBase>
        }
    }
}
