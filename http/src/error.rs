//! Error types for the HTTP transport

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Error payload shape used by the backend
///
/// Error responses are JSON objects optionally carrying a `message` or
/// `error` string field. `message` wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorEnvelope {
    /// Primary human-readable message
    pub message: Option<String>,
    /// Secondary error description
    pub error: Option<String>,
}

impl ErrorEnvelope {
    /// The most specific message the envelope carries (`message` > `error`)
    #[must_use]
    pub fn best_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
    }

    /// Parse an envelope out of a raw error body, if it looks like one
    #[must_use]
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let envelope: Self = serde_json::from_slice(body).ok()?;
        if envelope.message.is_none() && envelope.error.is_none() {
            return None;
        }
        Some(envelope)
    }
}

/// Errors that can occur when talking to the backend
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request aborted by a caller-supplied cancellation handle
    ///
    /// Cancellations are logged and returned to the caller, but never routed
    /// through the middleware error hooks.
    #[error("request cancelled")]
    Cancelled,

    /// Connection failure or timeout before a response arrived
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx HTTP status
    ///
    /// Displays the backend's own message when the error body carries one,
    /// so container `error` fields surface it verbatim.
    #[error("{}", status_message(.status, .envelope))]
    Status {
        /// HTTP status code
        status: u16,
        /// Parsed error body, when the backend sent one
        envelope: Option<ErrorEnvelope>,
    },

    /// Response body could not be decoded into the expected type
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// A `before_request` middleware hook rejected the request
    #[error("middleware rejected request: {0}")]
    Middleware(String),
}

fn status_message(status: &u16, envelope: &Option<ErrorEnvelope>) -> String {
    envelope
        .as_ref()
        .and_then(ErrorEnvelope::best_message)
        .map_or_else(
            || format!("request failed with status {status}"),
            ToOwned::to_owned,
        )
}

impl HttpError {
    /// The message embedded in the error response body, if any
    ///
    /// Precedence: body `message` field, else body `error` field.
    #[must_use]
    pub fn response_message(&self) -> Option<&str> {
        match self {
            Self::Status { envelope, .. } => envelope.as_ref().and_then(ErrorEnvelope::best_message),
            _ => None,
        }
    }

    /// The HTTP status code, when a response was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is a caller-initiated cancellation
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether the backend rejected the request as unauthorized
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}
