//! Error type for backend API calls and normalization of error bodies.
//!
//! ERROR HANDLING
//! ==============
//! The backend reports failures as either `{"errors": {field: [msg, ...]}}`
//! or `{"message": "..."}`. Anything else (non-JSON bodies, transport
//! failures) degrades to a free-text message so the UI always has something
//! to show.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Failure of a backend API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend rejected specific fields. Keys are backend field names, values
    /// the first message reported for that field.
    #[error("{}", describe_fields(.0))]
    Fields(BTreeMap<String, String>),

    /// Non-2xx response without field attribution.
    #[error("{message}")]
    Message { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Normalize a non-2xx response into an `ApiError`.
    ///
    /// Field errors win over free-text messages. The message is taken from
    /// `errors.message`, then the top-level `message`, then the raw body,
    /// then a status-only fallback.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
            let fields = parsed.field_errors();
            if !fields.is_empty() {
                return Self::Fields(fields);
            }
            if let Some(message) = parsed.message() {
                return Self::Message { status, message };
            }
        }
        let raw = body.trim();
        let message = if raw.is_empty() { status_message(status) } else { truncate_raw(raw) };
        Self::Message { status, message }
    }
}

/// Longest raw body, in chars, shown as an error message. Proxies return
/// whole HTML pages on 502/504.
pub const RAW_BODY_MAX_CHARS: usize = 200;

fn truncate_raw(raw: &str) -> String {
    match raw.char_indices().nth(RAW_BODY_MAX_CHARS) {
        Some((cut, _)) => format!("{}...", raw[..cut].trim_end()),
        None => raw.to_owned(),
    }
}

fn status_message(status: u16) -> String {
    format!("request failed with status {status}")
}

fn describe_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

impl ErrorBody {
    /// First non-empty message per field from an `errors` object whose
    /// values are message lists. Other value shapes are not field errors.
    fn field_errors(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let Some(Value::Object(map)) = &self.errors else {
            return out;
        };
        for (field, value) in map {
            let Value::Array(messages) = value else {
                continue;
            };
            let first = messages
                .iter()
                .filter_map(Value::as_str)
                .find(|m| !m.trim().is_empty());
            if let Some(message) = first {
                out.insert(field.clone(), message.to_owned());
            }
        }
        out
    }

    fn message(&self) -> Option<String> {
        let nested = match &self.errors {
            Some(Value::Object(map)) => map.get("message"),
            Some(v @ Value::String(_)) => Some(v),
            Some(Value::Array(items)) => items.iter().find(|v| v.is_string()),
            _ => None,
        };
        nested
            .and_then(value_message)
            .or_else(|| self.message.as_ref().and_then(value_message))
    }
}

fn value_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
