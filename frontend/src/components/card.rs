use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let has_header = props.title.is_some() || props.description.is_some();

    html! {
        <div class={classes!("bg-white", "rounded-xl", "shadow-lg", "p-6", "md:p-8", props.class.clone())}>
            if has_header {
                <div class="mb-6">
                    if let Some(title) = props.title.clone() {
                        <h2 class="text-2xl font-bold text-gray-900 mb-2">{title}</h2>
                    }
                    if let Some(description) = props.description.clone() {
                        <p class="text-gray-600">{description}</p>
                    }
                </div>
            }
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardSectionProps {
    pub title: AttrValue,
    pub children: Children,
}

/// Titled paragraph used by the explanatory cards.
#[function_component(CardSection)]
pub fn card_section(props: &CardSectionProps) -> Html {
    html! {
        <div>
            <h3 class="font-semibold text-gray-900 mb-2">{props.title.clone()}</h3>
            <p>{props.children.clone()}</p>
        </div>
    }
}
