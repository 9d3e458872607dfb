//! Classified API failures.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response and every transport failure is mapped to exactly one
//! [`ApiError`] variant. Only [`ApiError::Unauthorized`] triggers the central
//! invalidation side effect; all variants are still returned to the caller so
//! views can render them inline.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde::Deserialize;

pub const UNAUTHORIZED_MESSAGE: &str = "Your session has expired. Please log in again.";
pub const RATE_LIMITED_MESSAGE: &str = "Too many attempts. Please wait a moment and try again.";
pub const SERVER_MESSAGE: &str = "The server ran into a problem. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Cannot reach the server ({0}). Check your connection and try again.")]
    Network(String),
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    RateLimited { message: String },
    #[error("{message}")]
    Validation { status: u16, message: String, fields: BTreeMap<String, String> },
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response from the server: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Per-field validation message, when the server supplied one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            Self::Validation { fields, .. } => fields.get(field).map(String::as_str),
            _ => None,
        }
    }
}

/// Error body shape of the remote API (`message` plus optional field map).
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, String>>,
}

fn parse_error_body(body: &str) -> ErrorBody {
    if body.trim().is_empty() {
        return ErrorBody::default();
    }
    serde_json::from_str(body).unwrap_or_default()
}

/// Map a response status + body to an error. Returns `None` for 2xx.
pub fn classify(status: u16, body: &str) -> Option<ApiError> {
    if (200..300).contains(&status) {
        return None;
    }
    let ErrorBody { message, errors } = parse_error_body(body);
    let message = message.filter(|m| !m.trim().is_empty());
    let err = match status {
        401 => ApiError::Unauthorized { message: message.unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_owned()) },
        429 => ApiError::RateLimited { message: message.unwrap_or_else(|| RATE_LIMITED_MESSAGE.to_owned()) },
        400..=499 => ApiError::Validation {
            status,
            message: message.unwrap_or_else(|| request_failed_message(status)),
            fields: errors.unwrap_or_default(),
        },
        _ => ApiError::Server { status, message: message.unwrap_or_else(|| SERVER_MESSAGE.to_owned()) },
    };
    Some(err)
}

fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status}).")
}
