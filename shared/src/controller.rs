//! The submit state machine shared by every enrollment page.
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Succeeded
//!                      |  \--err--> Failed
//! Succeeded/Failed --submit--> Submitting
//! Succeeded/Failed --edit----> Idle
//! ```
//!
//! A controller holds at most one outcome: a response or an error message,
//! never both. Starting a submit or editing a field drops it.

use std::future::Future;

use thiserror::Error;

use crate::error::{RequestError, ValidationError};
use crate::form::FieldSet;
use crate::workflow::Workflow;

/// Performs the network half of a submit.
pub trait Transport {
    fn send<W: Workflow>(
        &self,
        request: &W::Request,
    ) -> impl Future<Output = Result<W::Response, RequestError>>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<R> {
    Idle,
    Submitting,
    Succeeded(R),
    Failed(String),
}

/// Why a submit did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController<W: Workflow> {
    fields: FieldSet,
    phase: Phase<W::Response>,
}

impl<W: Workflow> Default for FormController<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Workflow> FormController<W> {
    pub fn new() -> Self {
        Self {
            fields: FieldSet::new(W::FIELDS),
            phase: Phase::Idle,
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn value(&self, field: &str) -> &str {
        self.fields.get(field)
    }

    pub fn phase(&self) -> &Phase<W::Response> {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    pub fn last_response(&self) -> Option<&W::Response> {
        match &self.phase {
            Phase::Succeeded(response) => Some(response),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Update a field; any previous outcome is dropped. An in-flight submit
    /// stays in flight.
    pub fn edit(&mut self, field: &str, value: impl Into<String>) {
        self.fields.set(field, value);
        if matches!(self.phase, Phase::Succeeded(_) | Phase::Failed(_)) {
            self.phase = Phase::Idle;
        }
    }

    /// The request a submit would send right now, if it may start.
    pub fn prepare(&self) -> Result<W::Request, SubmitBlocked> {
        if self.is_loading() {
            return Err(SubmitBlocked::Busy);
        }
        self.fields.validate(W::FIELDS)?;
        Ok(W::request(&self.fields))
    }

    /// Enter `Submitting`, dropping any previous outcome.
    pub fn begin(&mut self) {
        self.phase = Phase::Submitting;
    }

    /// Record the outcome of the request started by `begin`. Fields are kept
    /// on failure so the user can correct and resubmit.
    pub fn complete(&mut self, outcome: Result<W::Response, RequestError>) {
        self.phase = match outcome {
            Ok(response) => {
                if W::resets_fields(&response) {
                    self.fields.clear();
                }
                Phase::Succeeded(response)
            }
            Err(err) => Phase::Failed(err.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    use serde_json::{Value, json};

    use crate::api::AuthStatus;
    use crate::envelope;
    use crate::workflow::{
        Authenticate, CODE_2FA, GeneratePassword, GenerateTwoFactor, PASSWORD, USERNAME,
    };

    /// Replays one canned HTTP answer and records what was sent.
    struct CannedTransport {
        status: u16,
        body: String,
        calls: Cell<usize>,
        sent: RefCell<Vec<Value>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: Value) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self::new(0, Value::Null)
        }
    }

    impl Transport for CannedTransport {
        async fn send<W: Workflow>(
            &self,
            request: &W::Request,
        ) -> Result<W::Response, RequestError> {
            self.calls.set(self.calls.get() + 1);
            self.sent
                .borrow_mut()
                .push(serde_json::to_value(request).expect("request serializes"));
            if self.status == 0 {
                return Err(RequestError::network("Failed to fetch"));
            }
            envelope::decode(self.status, &self.body)
        }
    }

    /// `prepare` then `begin`, as the page does on submit.
    fn start<W: Workflow>(form: &mut FormController<W>) -> Result<W::Request, SubmitBlocked> {
        let request = form.prepare()?;
        form.begin();
        Ok(request)
    }

    /// A whole submit in the order the page hook runs it.
    fn run_submit<W: Workflow, T: Transport>(
        form: &mut FormController<W>,
        transport: &T,
    ) -> Result<(), SubmitBlocked> {
        let request = start(form)?;
        let outcome = tokio_test::block_on(transport.send::<W>(&request));
        form.complete(outcome);
        Ok(())
    }

    fn password_ok() -> CannedTransport {
        CannedTransport::new(
            200,
            json!({"message": "OK", "username": "alice", "qr_code_base64": "iVBORw0KG..."}),
        )
    }

    #[test]
    fn test_empty_required_field_never_sends() {
        let transport = password_ok();
        let mut form = FormController::<GeneratePassword>::new();

        let result = run_submit(&mut form, &transport);
        assert_eq!(
            result,
            Err(SubmitBlocked::Invalid(ValidationError::Missing { field: USERNAME }))
        );
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.phase(), &Phase::Idle);

        let transport = CannedTransport::new(200, json!({}));
        let mut form = FormController::<GenerateTwoFactor>::new();
        assert!(run_submit(&mut form, &transport).is_err());
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_bad_otp_code_never_sends() {
        let transport = CannedTransport::new(200, json!({"status": "success", "message": "ok"}));
        let mut form = FormController::<Authenticate>::new();
        form.edit(USERNAME, "alice");
        form.edit(PASSWORD, "secret");

        for code in ["", "12345", "abcdef", "1234567", "12 456"] {
            form.edit(CODE_2FA, code);
            assert!(run_submit(&mut form, &transport).is_err(), "{code:?}");
        }
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_generate_password_success_scenario() {
        let transport = password_ok();
        let mut form = FormController::<GeneratePassword>::new();
        form.edit(USERNAME, "alice");

        run_submit(&mut form, &transport).unwrap();

        assert_eq!(transport.sent.borrow()[0], json!({"username": "alice"}));
        let response = form.last_response().expect("response recorded");
        assert_eq!(response.message, "OK");
        assert_eq!(
            crate::api::png_data_uri(&response.qr_code_base64).as_deref(),
            Some("data:image/png;base64,iVBORw0KG...")
        );
        assert_eq!(form.last_error(), None);
        assert!(!form.is_loading());
        assert_eq!(form.value(USERNAME), "");
    }

    #[test]
    fn test_generate_two_factor_success_clears_username() {
        let transport = CannedTransport::new(
            200,
            json!({
                "message": "2FA generated successfully",
                "username": "alice",
                "qr_code_2fa_base64": "iVBOR",
                "manual_entry_key": "JBSWY3DPEHPK3PXP"
            }),
        );
        let mut form = FormController::<GenerateTwoFactor>::new();
        form.edit(USERNAME, "alice");

        run_submit(&mut form, &transport).unwrap();
        assert_eq!(
            form.last_response().map(|r| r.manual_entry_key.as_str()),
            Some("JBSWY3DPEHPK3PXP")
        );
        assert_eq!(form.value(USERNAME), "");
    }

    #[test]
    fn test_failure_keeps_fields() {
        let transport = CannedTransport::new(
            200,
            json!({"error": "User not found. Please create password first."}),
        );
        let mut form = FormController::<GenerateTwoFactor>::new();
        form.edit(USERNAME, "bob");

        run_submit(&mut form, &transport).unwrap();
        assert_eq!(
            form.last_error(),
            Some("User not found. Please create password first.")
        );
        assert!(form.last_response().is_none());
        assert_eq!(form.value(USERNAME), "bob");
    }

    #[test]
    fn test_network_failure_uses_generic_message() {
        let transport = CannedTransport::offline();
        let mut form = FormController::<GeneratePassword>::new();
        form.edit(USERNAME, "alice");

        run_submit(&mut form, &transport).unwrap();
        assert_eq!(form.last_error(), Some(crate::error::GENERIC_ERROR_MESSAGE));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_auth_rejection_keeps_form() {
        let transport =
            CannedTransport::new(200, json!({"status": "error", "message": "Invalid credentials"}));
        let mut form = FormController::<Authenticate>::new();
        form.edit(USERNAME, "alice");
        form.edit(PASSWORD, "wrong");
        form.edit(CODE_2FA, "123456");

        run_submit(&mut form, &transport).unwrap();

        assert_eq!(
            transport.sent.borrow()[0],
            json!({"username": "alice", "password": "wrong", "code_2fa": "123456"})
        );
        let response = form.last_response().expect("response recorded");
        assert_eq!(response.status, AuthStatus::Other("error".to_string()));
        assert_eq!(response.message, "Invalid credentials");
        assert_eq!(form.value(USERNAME), "alice");
        assert_eq!(form.value(PASSWORD), "wrong");
        assert_eq!(form.value(CODE_2FA), "123456");
    }

    #[test]
    fn test_auth_success_resets_all_fields() {
        let transport = CannedTransport::new(
            200,
            json!({
                "status": "success",
                "message": "Authentification réussie",
                "username": "alice",
                "token": "fake-jwt-token-for-alice"
            }),
        );
        let mut form = FormController::<Authenticate>::new();
        form.edit(USERNAME, "alice");
        form.edit(PASSWORD, "correct");
        form.edit(CODE_2FA, "654321");

        run_submit(&mut form, &transport).unwrap();
        assert!(form.fields().is_empty());
        assert!(form.last_response().is_some_and(|r| r.is_success()));
    }

    #[test]
    fn test_auth_missing_status_keeps_form() {
        let transport = CannedTransport::new(200, json!({"message": "Pending"}));
        let mut form = FormController::<Authenticate>::new();
        form.edit(USERNAME, "alice");
        form.edit(PASSWORD, "pw");
        form.edit(CODE_2FA, "000000");

        run_submit(&mut form, &transport).unwrap();
        assert_eq!(form.value(CODE_2FA), "000000");
    }

    #[test]
    fn test_edit_clears_outcome() {
        let mut form = FormController::<GeneratePassword>::new();
        form.edit(USERNAME, "alice");
        start(&mut form).unwrap();
        form.complete(Err(RequestError::http_status(500)));
        assert_eq!(form.last_error(), Some("Erreur HTTP: 500"));

        form.edit(USERNAME, "alice2");
        assert_eq!(form.phase(), &Phase::Idle);
        assert_eq!(form.last_error(), None);

        run_submit(&mut form, &password_ok()).unwrap();
        assert!(form.last_response().is_some());
        form.edit(USERNAME, "a");
        assert!(form.last_response().is_none());
        assert_eq!(form.phase(), &Phase::Idle);
    }

    #[test]
    fn test_edit_while_submitting_stays_loading() {
        let mut form = FormController::<GeneratePassword>::new();
        form.edit(USERNAME, "alice");
        start(&mut form).unwrap();

        form.edit(USERNAME, "alicia");
        assert!(form.is_loading());
        assert_eq!(start(&mut form), Err(SubmitBlocked::Busy));
    }

    #[test]
    fn test_resubmit_drops_previous_outcome() {
        let mut form = FormController::<GeneratePassword>::new();
        form.edit(USERNAME, "alice");
        start(&mut form).unwrap();
        form.complete(Err(RequestError::network("offline")));
        assert!(form.last_error().is_some());

        start(&mut form).unwrap();
        assert!(form.is_loading());
        assert_eq!(form.last_error(), None);
        assert!(form.last_response().is_none());
    }
}
