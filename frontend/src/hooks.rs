//! Yew binding for the shared submit state machine.

use std::rc::Rc;

use cofrap_shared::{FormController, RequestError, SubmitBlocked, Transport, ValidationError, Workflow};
use gloo::console;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::use_api_client;

pub enum FormAction<W: Workflow> {
    Edit { field: &'static str, value: String },
    Begin,
    Complete(Result<W::Response, RequestError>),
}

pub struct FormStore<W: Workflow> {
    pub controller: FormController<W>,
}

impl<W: Workflow> Default for FormStore<W> {
    fn default() -> Self {
        Self {
            controller: FormController::new(),
        }
    }
}

impl<W: Workflow> Reducible for FormStore<W> {
    type Action = FormAction<W>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        match action {
            FormAction::Edit { field, value } => controller.edit(field, value),
            FormAction::Begin => controller.begin(),
            FormAction::Complete(outcome) => controller.complete(outcome),
        }
        Rc::new(Self { controller })
    }
}

/// Form state plus the callbacks a page wires into its inputs.
pub struct WorkflowForm<W: Workflow> {
    store: UseReducerHandle<FormStore<W>>,
    invalid: UseStateHandle<Option<ValidationError>>,
    pub onsubmit: Callback<SubmitEvent>,
}

impl<W: Workflow> WorkflowForm<W> {
    pub fn controller(&self) -> &FormController<W> {
        &self.store.controller
    }

    pub fn value(&self, field: &str) -> AttrValue {
        AttrValue::from(self.store.controller.value(field).to_string())
    }

    /// Message for a field the last blocked submit rejected.
    pub fn field_error(&self, field: &str) -> Option<AttrValue> {
        (*self.invalid)
            .as_ref()
            .filter(|err| err.field() == field)
            .map(|err| AttrValue::Static(validation_message(err)))
    }

    pub fn oninput(&self, field: &'static str) -> Callback<InputEvent> {
        let store = self.store.clone();
        let invalid = self.invalid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if (*invalid).as_ref().is_some_and(|err| err.field() == field) {
                invalid.set(None);
            }
            store.dispatch(FormAction::Edit {
                field,
                value: input.value(),
            });
        })
    }
}

/// Runs on submit only after the browser's own constraint validation has
/// passed; the controller re-checks before anything is sent.
#[hook]
pub fn use_workflow_form<W: Workflow>() -> WorkflowForm<W> {
    let store = use_reducer(FormStore::<W>::default);
    let invalid = use_state(|| None::<ValidationError>);
    let client = use_api_client();

    let onsubmit = {
        let store = store.clone();
        let invalid = invalid.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match store.controller.prepare() {
                Ok(request) => request,
                Err(blocked) => {
                    console::warn!(format!("{}: submit blocked: {}", W::ENDPOINT.path(), blocked));
                    if let SubmitBlocked::Invalid(err) = blocked {
                        invalid.set(Some(err));
                    }
                    return;
                }
            };
            invalid.set(None);
            store.dispatch(FormAction::Begin);

            let store = store.clone();
            let client = client.clone();
            spawn_local(async move {
                let outcome = client.send::<W>(&request).await;
                match &outcome {
                    Ok(_) => console::log!(format!("{}: ok", W::ENDPOINT.path())),
                    Err(err) => {
                        console::error!(format!("{}: {}", W::ENDPOINT.path(), err.detail()))
                    }
                }
                store.dispatch(FormAction::Complete(outcome));
            });
        })
    };

    WorkflowForm {
        store,
        invalid,
        onsubmit,
    }
}

fn validation_message(err: &ValidationError) -> &'static str {
    match err {
        ValidationError::Missing { .. } => "Ce champ est obligatoire",
        ValidationError::Pattern { .. } => "Le format saisi est invalide",
        ValidationError::TooLong { .. } => "La valeur saisie est trop longue",
    }
}
