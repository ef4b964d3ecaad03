use web_sys::HtmlSelectElement;
use yew::prelude::*;

use common::form::FieldValue;

use super::{FieldBinding, FormBase};

#[derive(Properties, PartialEq)]
pub struct SelectInputProps {
    pub binding: FieldBinding,
    pub label: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Shown while nothing from `items` is selected.
    #[prop_or_default]
    pub placeholder: Option<String>,
    pub items: Vec<String>,
}

/// The DOM keeps its own selection once the user has picked something, so the
/// bound value is pushed back onto the element after every render.
pub struct SelectInput {
    select_ref: NodeRef,
}

impl Component for SelectInput {
    type Message = ();
    type Properties = SelectInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            select_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let binding = &props.binding;
        let current = binding.text();

        let onchange = {
            let on_change = binding.on_change.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit(FieldValue::Text(select.value()));
            })
        };
        let onblur = binding.on_blur.reform(|_: FocusEvent| ());
        let has_selection = props.items.iter().any(|item| item == current);

        html! {
            <FormBase
                name={binding.path}
                label={props.label.clone()}
                description={props.description.clone()}
                state={binding.state}
            >
                <select
                    ref={self.select_ref.clone()}
                    class="select"
                    id={binding.id()}
                    name={binding.id()}
                    data-invalid={binding.state.invalid.to_string()}
                    aria-invalid={binding.aria_invalid()}
                    {onchange}
                    {onblur}
                >
                    <option value="" disabled={true} hidden={true} selected={!has_selection}>
                        { props.placeholder.clone().unwrap_or_default() }
                    </option>
                    { for props.items.iter().map(|item| html! {
                        <option key={item.clone()} value={item.clone()} selected={item == current}>
                            { item.clone() }
                        </option>
                    }) }
                </select>
            </FormBase>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(select) = self.select_ref.cast::<HtmlSelectElement>() {
            select.set_value(ctx.props().binding.text());
        }
    }
}
