use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FormPageProps {
    /// CSS length for the column width.
    #[prop_or_else(|| "42rem".to_string())]
    pub max_width: String,
    pub children: Children,
}

/// Centered single column the form is laid out in.
pub struct FormPage;

impl Component for FormPage {
    type Message = ();
    type Properties = FormPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FormPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "max-width: {};
             margin: 0 auto;
             padding: 4rem 2rem;",
            props.max_width
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
