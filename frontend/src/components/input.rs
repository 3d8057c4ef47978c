use cofrap_shared::form::{described_by, error_id, helper_id, input_id};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub pattern: Option<AttrValue>,
    #[prop_or_default]
    pub maxlength: Option<usize>,
    #[prop_or_default]
    pub inputmode: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Extra ids appended to the derived `aria-describedby`.
    #[prop_or_default]
    pub aria_describedby: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Labelled text input with optional helper text or error message.
#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let id = input_id(&props.label, props.id.as_deref());
    let has_error = props.error.is_some();
    let has_helper = props.helper_text.is_some();
    let describedby = described_by(&id, has_error, has_helper, props.aria_describedby.as_deref());

    let border = if has_error {
        "border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300"
    };

    html! {
        <div class="w-full">
            <label for={id.clone()} class="block text-sm font-medium text-gray-700 mb-2">
                {props.label.clone()}
            </label>
            <input
                id={id.clone()}
                name={props.name.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                autofocus={props.autofocus}
                autocomplete={props.autocomplete.clone()}
                pattern={props.pattern.clone()}
                maxlength={props.maxlength.map(|max| max.to_string())}
                inputmode={props.inputmode.clone()}
                aria-label={props.aria_label.clone()}
                aria-required={props.required.then_some("true")}
                aria-invalid={if has_error { "true" } else { "false" }}
                aria-describedby={describedby}
                class={classes!(
                    "w-full", "px-4", "py-3", "border", "rounded-lg",
                    "focus:outline-none", "focus:ring-2", "focus:ring-blue-500", "focus:border-transparent",
                    "transition-all", "duration-200",
                    border,
                    props.class.clone()
                )}
            />
            if let Some(error) = props.error.clone() {
                <p id={error_id(&id)} class="mt-1 text-sm text-red-600" role="alert">{error}</p>
            }
            if !has_error {
                if let Some(helper) = props.helper_text.clone() {
                    <p id={helper_id(&id)} class="mt-1 text-sm text-gray-500">{helper}</p>
                }
            }
        </div>
    }
}
