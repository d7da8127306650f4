//! Client configuration: the backend API base URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the URL is baked in at
//! build time through `option_env!`. Native builds (tests, tooling) may also
//! set it at runtime; the runtime value wins when both are present.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const API_BASE_URL_VAR: &str = "BACKEND_API_URL";

/// Errors produced while resolving [`ClientConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL variable was not set at build time or runtime.
    #[error("missing config: {var} not set")]
    Missing { var: &'static str },

    /// The base URL variable was set but unusable.
    #[error("invalid {var} '{value}': {reason}")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash, e.g. `https://api.example.com`.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve config from `BACKEND_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is missing or not an
    /// `http(s)://` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let runtime = std::env::var(API_BASE_URL_VAR).ok();
        let raw = runtime.as_deref().or(option_env!("BACKEND_API_URL"));
        Self::parse(raw)
    }

    /// Build config from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `raw` is absent, blank, or lacks an
    /// `http://`/`https://` scheme.
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() {
            return Err(ConfigError::Missing { var: API_BASE_URL_VAR });
        }
        let invalid = |reason| ConfigError::Invalid { var: API_BASE_URL_VAR, value: value.to_owned(), reason };
        let Some(rest) = value.strip_prefix("https://").or_else(|| value.strip_prefix("http://")) else {
            return Err(invalid("expected an http:// or https:// URL"));
        };
        if rest.trim_end_matches('/').is_empty() {
            return Err(invalid("missing host"));
        }
        Ok(Self { api_base_url: value.trim_end_matches('/').to_owned() })
    }

    /// Absolute URL for an API path such as `/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
