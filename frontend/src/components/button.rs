use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "text-white bg-blue-600 hover:bg-blue-700 focus:ring-blue-500"
            }
            ButtonVariant::Secondary => {
                "text-gray-700 bg-white border-gray-300 hover:bg-gray-50 focus:ring-gray-400"
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Disables the button and shows a spinner.
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type={props.button_type.clone()}
            disabled={props.disabled || props.is_loading}
            aria-busy={props.is_loading.then_some("true")}
            onclick={props.onclick.clone()}
            class={classes!(
                "inline-flex", "justify-center", "items-center", "px-6", "py-3",
                "border", "border-transparent", "text-sm", "font-medium", "rounded-lg",
                "focus:outline-none", "focus:ring-2", "focus:ring-offset-2",
                "disabled:opacity-50", "disabled:cursor-not-allowed",
                props.variant.classes(),
                props.class.clone()
            )}
        >
            if props.is_loading {
                <svg class="animate-spin -ml-1 mr-3 h-5 w-5" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" aria-hidden="true">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                {"Chargement..."}
            } else {
                {props.children.clone()}
            }
        </button>
    }
}
