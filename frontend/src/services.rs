// API service layer for communicating with the enrollment functions
use std::cell::Cell;
use std::rc::Rc;

use cofrap_shared::{ApiConfig, RequestError, Transport, Workflow, envelope};
use gloo::console;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::AbortController;
use yew::prelude::*;

use crate::config;

// ============================================
// HTTP CLIENT
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn timed_out_or(&self, timed_out: &Cell<bool>, err: gloo_net::Error) -> RequestError {
        if timed_out.get() {
            RequestError::Timeout {
                after_ms: self.config.timeout_ms,
            }
        } else {
            RequestError::network(err.to_string())
        }
    }
}

impl Transport for ApiClient {
    async fn send<W: Workflow>(&self, request: &W::Request) -> Result<W::Response, RequestError> {
        let url = self.config.url(W::ENDPOINT);
        let abort = AbortController::new()
            .map_err(|e| RequestError::network(format!("AbortController unavailable: {:?}", e)))?;

        // Dropping the timer before it fires cancels it.
        let timed_out = Rc::new(Cell::new(false));
        let _timer = self.config.timeout().map(|ms| {
            let abort = abort.clone();
            let timed_out = timed_out.clone();
            Timeout::new(ms, move || {
                timed_out.set(true);
                abort.abort();
            })
        });

        console::log!(format!("POST {}", W::ENDPOINT.path()));

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&abort.signal()))
            .json(request)
            .map_err(|e| RequestError::malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| self.timed_out_or(&timed_out, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.timed_out_or(&timed_out, e))?;

        envelope::decode(status, &body)
    }
}

// ============================================
// CONTEXT
// ============================================

/// One client per page load, shared by every page.
pub type ApiContext = Rc<ApiClient>;

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let client = use_state(|| Rc::new(ApiClient::new(config::api_config())));

    html! {
        <ContextProvider<ApiContext> context={(*client).clone()}>
            {props.children.clone()}
        </ContextProvider<ApiContext>>
    }
}

#[hook]
pub fn use_api_client() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not found")
}
