//! REST client for the backend auth API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with [`ApiError::Network`] since the
//! endpoints are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both come back as `ApiError`.
//! Nothing here retries; callers decide what to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use super::types::{LoginResponse, UserEnvelope};
use super::types::{Credentials, RegistrationRequest, SessionToken, UserProfile};
use crate::config::ClientConfig;

pub const REGISTER_PATH: &str = "/register";
pub const LOGIN_PATH: &str = "/login";
pub const USER_PATH: &str = "/user";

/// The three backend operations the client depends on.
///
/// Futures are not `Send`: the browser runs everything on one thread and
/// `gloo-net` futures hold JS handles.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Create an account via `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a non-2xx response.
    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError>;

    /// Exchange credentials for a session token via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx response, or a
    /// success body without a usable token.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError>;

    /// Fetch the signed-in user via `GET /user` with a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-2xx response, or a
    /// malformed body.
    async fn fetch_current_user(&self, token: &SessionToken) -> Result<UserProfile, ApiError>;
}

/// [`AuthApi`] over HTTP against the configured base URL.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(REGISTER_PATH);
            log::debug!("POST {url}");
            let req = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            send(req).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &self.config);
            Err(unavailable())
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            log::debug!("POST {url}");
            let req = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body = send(req).await?;
            parse_login_body(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, &self.config);
            Err(unavailable())
        }
    }

    async fn fetch_current_user(&self, token: &SessionToken) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "csr")]
        {
            let url = self.config.endpoint(USER_PATH);
            log::debug!("GET {url}");
            let req = gloo_net::http::Request::get(&url)
                .header("Authorization", &token.bearer())
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let body = send(req).await?;
            parse_user_body(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, &self.config);
            Err(unavailable())
        }
    }
}

/// Send a request and return the body of a 2xx response.
#[cfg(feature = "csr")]
async fn send(req: gloo_net::http::Request) -> Result<String, ApiError> {
    let resp = req.send().await.map_err(|e| {
        log::warn!("request failed: {e}");
        ApiError::Network(e.to_string())
    })?;
    let status = resp.status();
    let body = resp.text().await;
    if !resp.ok() {
        log::warn!("{} responded {status}", resp.url());
        return Err(ApiError::from_response(status, &body.unwrap_or_default()));
    }
    body.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_login_body(body: &str) -> Result<SessionToken, ApiError> {
    let parsed: LoginResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    SessionToken::new(parsed.token).ok_or_else(|| ApiError::Decode("empty token".to_owned()))
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn parse_user_body(body: &str) -> Result<UserProfile, ApiError> {
    serde_json::from_str::<UserEnvelope>(body)
        .map(|env| env.user)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
