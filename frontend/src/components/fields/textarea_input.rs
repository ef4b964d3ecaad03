use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use common::form::FieldValue;

use super::{FieldBinding, FormBase};

#[derive(Properties, PartialEq)]
pub struct TextareaInputProps {
    pub binding: FieldBinding,
    pub label: String,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or(4)]
    pub rows: u32,
}

pub struct TextareaInput;

impl Component for TextareaInput {
    type Message = ();
    type Properties = TextareaInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TextareaInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let binding = &props.binding;

        let oninput = {
            let on_change = binding.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                on_change.emit(FieldValue::Text(value));
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
                <textarea
                    class="textarea"
                    id={binding.id()}
                    name={binding.id()}
                    autocomplete="on"
                    rows={props.rows.to_string()}
                    value={binding.text().to_string()}
                    aria-invalid={binding.aria_invalid()}
                    {oninput}
                    {onblur}
                />
            </FormBase>
        }
    }
}
