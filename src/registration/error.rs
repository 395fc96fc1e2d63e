//! Registration errors and backend error-message extraction

use crate::infrastructure::log_messages;
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Fields checked, in order, for a backend error message
const MESSAGE_FIELDS: [&str; 3] = ["error", "detail", "message"];

/// Errors returned by [`RegistrationClient`](super::RegistrationClient)
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The backend answered with a non-success status
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Registration request failed: {0}")]
    Transport(String),

    #[error("Registration request timed out")]
    Timeout,

    #[error("Malformed registration response: {0}")]
    MalformedResponse(String),

    /// A registration field failed validation before anything was sent
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid registration endpoint '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Failed to encode registration request: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl RegistrationError {
    /// Text shown to the farmer
    ///
    /// Backend rejections carry the backend's own message and invalid fields
    /// name the field; everything else is reported as an unexpected error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::InvalidField { .. } => self.to_string(),
            _ => log_messages::registration::UNEXPECTED_ERROR.to_string(),
        }
    }
}

/// Derive a single error message from a failed registration response
///
/// Priority: `error`, `detail`, `message`, then every value of the body
/// flattened one level and joined with ", ", then a status fallback.
pub fn extract_error_message(status: StatusCode, body: &Value) -> String {
    if let Value::Object(map) = body {
        for field in MESSAGE_FIELDS {
            if let Some(value) = map.get(field).filter(|v| is_truthy(v)) {
                return to_display_string(value);
            }
        }
    }

    let flattened = flatten_values(body);
    if !flattened.is_empty() {
        return flattened;
    }

    format!("Registration failed with status: {}", status.as_u16())
}

fn flatten_values(body: &Value) -> String {
    let values: Vec<&Value> = match body {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        Value::String(_) => vec![body],
        _ => Vec::new(),
    };

    values
        .into_iter()
        .flat_map(|value| match value {
            Value::Array(items) => items.iter().collect::<Vec<_>>(),
            other => vec![other],
        })
        .map(join_element)
        .collect::<Vec<_>>()
        .join(", ")
}

// Array joins render null as an empty string
fn join_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => to_display_string(other),
    }
}

pub(super) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(super) fn to_display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(join_element).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
