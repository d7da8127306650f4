//! Scripted `AuthApi` double and live-form stand-in shared by page
//! controller tests.

use std::cell::RefCell;
use std::sync::Mutex;

use crate::net::api::{AuthApi, parse_login_body, parse_user_body};
use crate::net::error::ApiError;
use crate::net::types::{Credentials, RegistrationRequest, SessionToken, UserProfile};
use crate::state::form::{FormHandle, FormState};
use crate::util::cancel::CancelToken;
use crate::util::validation::Field;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Register(RegistrationRequest),
    Login(Credentials),
    FetchUser(String),
}

/// Replays canned backend responses and records every call.
///
/// Responses are given as `(status, json body)` and go through the same
/// parsing and error normalization as the HTTP client.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    response: Mutex<Option<(u16, serde_json::Value)>>,
    calls: Mutex<Vec<Call>>,
    cancel_during_call: Option<CancelToken>,
    during_call: Option<Box<dyn Fn()>>,
}

impl ScriptedApi {
    pub(crate) fn responding(status: u16, body: serde_json::Value) -> Self {
        Self { response: Mutex::new(Some((status, body))), ..Self::default() }
    }

    /// Cancel `token` while the call is in flight, as an unmount would.
    pub(crate) fn cancelling(mut self, token: &CancelToken) -> Self {
        self.cancel_during_call = Some(token.clone());
        self
    }

    /// Run `f` while the call is in flight, e.g. to type into the form.
    pub(crate) fn during_call(mut self, f: impl Fn() + 'static) -> Self {
        self.during_call = Some(Box::new(f));
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: Call) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(token) = &self.cancel_during_call {
            token.cancel();
        }
        if let Some(f) = &self.during_call {
            f();
        }
        let Some((status, body)) = self.response.lock().unwrap().clone() else {
            return Err(ApiError::Network("unscripted call".to_owned()));
        };
        let body = body.to_string();
        if (200..300).contains(&status) { Ok(body) } else { Err(ApiError::from_response(status, &body)) }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.respond(Call::Register(request.clone())).map(|_| ())
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        let body = self.respond(Call::Login(credentials.clone()))?;
        parse_login_body(&body)
    }

    async fn fetch_current_user(&self, token: &SessionToken) -> Result<UserProfile, ApiError> {
        let body = self.respond(Call::FetchUser(token.as_str().to_owned()))?;
        parse_user_body(&body)
    }
}

/// Collects every view the dashboard loader publishes.
pub(crate) struct Published<T>(RefCell<Vec<T>>);

impl<T: Clone> Published<T> {
    pub(crate) fn new() -> Self {
        Self(RefCell::new(Vec::new()))
    }

    pub(crate) fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub(crate) fn all(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

/// In-memory [`FormHandle`] that records every state a controller writes.
pub(crate) struct LiveForm {
    state: RefCell<FormState>,
    written: RefCell<Vec<FormState>>,
}

impl LiveForm {
    pub(crate) fn new(initial: FormState) -> Self {
        Self { state: RefCell::new(initial), written: RefCell::new(Vec::new()) }
    }

    /// Simulate a keystroke landing in the live form.
    pub(crate) fn type_into(&self, field: Field, value: &str) {
        let next = self.state.borrow().with_input(field, value);
        *self.state.borrow_mut() = next;
    }

    pub(crate) fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub(crate) fn written(&self) -> Vec<FormState> {
        self.written.borrow().clone()
    }
}

impl FormHandle for LiveForm {
    fn current(&self) -> Option<FormState> {
        Some(self.state())
    }

    fn replace(&self, next: FormState) {
        self.written.borrow_mut().push(next.clone());
        *self.state.borrow_mut() = next;
    }
}
