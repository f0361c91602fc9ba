//! Tagged error type for every REST call.
//!
//! ERROR HANDLING
//! ==============
//! Views match on the variant instead of inspecting message strings:
//! `Unauthorized` is global (session teardown), `Request` carries the backend
//! message, and `Decode`/`InvalidDecimal` flag payloads that failed boundary
//! validation.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Fallback shown when the backend payload carries no usable message.
pub const GENERIC_REQUEST_ERROR: &str = "Ocorreu um erro na requisição";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required field was left empty; no request was issued.
    #[error("{0}")]
    Validation(&'static str),
    /// The credential exchange was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The backend answered `401`; the session is gone.
    #[error("session rejected by the server")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("request failed ({status}): {message}")]
    Request { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not match the expected contract.
    #[error("unexpected response payload: {0}")]
    Decode(String),
    /// A decimal-as-string field could not be parsed.
    #[error("invalid decimal `{value}` in {field}")]
    InvalidDecimal { field: &'static str, value: String },
    /// A browser API call failed (blob, form data, DOM).
    #[error("browser error: {0}")]
    Browser(String),
    /// Called outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Request { status, message: extract_message(body) }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Pull a human-readable message out of a backend error payload.
///
/// Accepts `{"message": "..."}` and the validation form
/// `{"message": ["...", "..."]}`; anything else yields
/// [`GENERIC_REQUEST_ERROR`].
pub fn extract_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_REQUEST_ERROR.to_owned();
    };
    match value.get("message") {
        Some(serde_json::Value::String(message)) if !message.trim().is_empty() => message.clone(),
        Some(serde_json::Value::Array(items)) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(serde_json::Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .collect();
            if parts.is_empty() {
                GENERIC_REQUEST_ERROR.to_owned()
            } else {
                parts.join("; ")
            }
        }
        _ => GENERIC_REQUEST_ERROR.to_owned(),
    }
}
