//! Error types for the client.
//!
//! - [`ApiError`] - backend HTTP calls
//! - [`StorageError`] - localStorage operations
//!
//! Gates have no error type: a missing or malformed session token is
//! treated the same as "not signed in".

use thiserror::Error;

/// Errors returned by the backend API wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Failed to build the HTTP request (bad body, bad header).
    #[error("failed to build request: {0}")]
    Request(String),
    /// Network request failed (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// 401 response: the session token is missing or no longer valid.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// 403 response: signed in, but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),
    /// 404 response.
    #[error("not found")]
    NotFound,
    /// Any other non-2xx response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success status code and body to an error.
    ///
    /// The backend reports failures as `{"message": "..."}`; when the body
    /// has no such field the raw text (or the status reason) is used.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden(
                extract_message(body).unwrap_or_else(|| default_message(status, body)),
            ),
            404 => Self::NotFound,
            _ => Self::Http {
                status,
                message: extract_message(body).unwrap_or_else(|| default_message(status, body)),
            },
        }
    }

    /// Whether the error means the stored session token is no longer valid.
    ///
    /// A 403 on a regular endpoint is a permission refusal and keeps the
    /// session.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Whether a failed `GET /auth/me` rejects the token itself.
    ///
    /// That endpoint only checks the token, so 401 and 403 both do.
    pub fn rejects_token(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            gloo_net::Error::JsError(e) => Self::Network(e.message),
            other => Self::Network(other.to_string()),
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

fn default_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    match status {
        400 => "bad request".to_string(),
        403 => "you are not allowed to do that".to_string(),
        409 => "conflict".to_string(),
        500..=599 => "server error".to_string(),
        _ => "request failed".to_string(),
    }
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available (private mode, no window).
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to write an entry.
    #[error("failed to write '{0}' to localStorage")]
    WriteFailed(String),
    /// Failed to remove an entry.
    #[error("failed to remove '{0}' from localStorage")]
    RemoveFailed(String),
}
