use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub children: Children,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    let (classes, role) = match props.kind {
        AlertKind::Error => ("bg-red-50 border-red-200 text-red-700", "alert"),
        AlertKind::Success => ("bg-green-50 border-green-200 text-green-800", "status"),
    };

    html! {
        <div class={classes!("border", "px-4", "py-3", "rounded-lg", classes)} {role}>
            {props.children.clone()}
        </div>
    }
}
