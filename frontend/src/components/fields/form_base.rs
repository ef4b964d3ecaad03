use common::form::{FieldPath, FieldState, ValidationError};
use yew::{classes, html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FormBaseProps {
    pub name: FieldPath,
    pub label: String,
    #[prop_or_default]
    pub description: Option<String>,
    #[prop_or_default]
    pub state: FieldState,
    /// Control first, then label; no description.
    #[prop_or_default]
    pub is_checkbox: bool,
    #[prop_or_default]
    pub children: Html,
}

/// Shared layout for a single field: label, optional description, the bound
/// control and the current error, if any.
pub struct FormBase;

impl Component for FormBase {
    type Message = ();
    type Properties = FormBaseProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormBase
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let orientation = if props.is_checkbox {
            "field-horizontal"
        } else {
            "field-vertical"
        };

        html! {
            <div
                class={classes!("field", orientation)}
                data-invalid={props.state.invalid.to_string()}
            >
                { if props.is_checkbox { props.children.clone() } else { html! {} } }
                <div class="field-content">
                    <label class="field-label" for={props.name.to_string()}>
                        { props.label.clone() }
                    </label>
                    {
                        match (&props.description, props.is_checkbox) {
                            (Some(description), false) => html! {
                                <p class="field-description">{ description.clone() }</p>
                            },
                            _ => html! {},
                        }
                    }
                    { if props.is_checkbox { field_error(props.state.error) } else { html! {} } }
                </div>
                {
                    if props.is_checkbox {
                        html! {}
                    } else {
                        html! {
                            <>
                                { props.children.clone() }
                                { field_error(props.state.error) }
                            </>
                        }
                    }
                }
            </div>
        }
    }
}

/// Renders `error` as an alert paragraph, or nothing.
pub fn field_error(error: Option<ValidationError>) -> Html {
    match error {
        Some(error) => html! {
            <p class="field-error" role="alert">{ error.to_string() }</p>
        },
        None => html! {},
    }
}
