//! Middleware pipeline types
//!
//! Middlewares decouple cross-cutting request/response behavior
//! (notifications, logging, future concerns such as retries) from the
//! transport client and from each call site. The client owns an ordered
//! list of middlewares and folds it around every request.

use crate::error::HttpError;
use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Per-request notification configuration
///
/// A closed structure with documented defaults, passed alongside every
/// request. Request-scoped only; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    /// Emit a success notification on 2xx responses (default `true`)
    pub show_success_toast: bool,
    /// Emit an error notification on failures (default `true`)
    pub show_error_toast: bool,
    /// Success message override; falls back to the middleware default
    pub success_message: Option<String>,
    /// Error message override; the backend's own message still wins
    pub error_message: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            show_success_toast: true,
            show_error_toast: true,
            success_message: None,
            error_message: None,
        }
    }
}

impl RequestOptions {
    /// Options with every default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for list fetches: no success toast, errors still shown
    #[must_use]
    pub fn silent_success() -> Self {
        Self {
            show_success_toast: false,
            ..Self::default()
        }
    }

    /// Set the success message
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    /// Set the fallback error message
    #[must_use]
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Suppress the error toast as well
    #[must_use]
    pub const fn without_error_toast(mut self) -> Self {
        self.show_error_toast = false;
        self
    }
}

/// The request as seen by the middleware pipeline
///
/// `before_request` hooks may mutate the path and options before the
/// request is sent.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method
    pub method: Method,
    /// Path relative to the client base URL
    pub path: String,
    /// Notification configuration for this request
    pub options: RequestOptions,
}

impl RequestContext {
    /// Build a context for one outgoing request
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method,
            path: path.into(),
            options,
        }
    }
}

/// A successful response as seen by `after_response` hooks
///
/// Hooks observe the raw body before JSON decoding.
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// HTTP status
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ResponseInfo {
    /// The body parsed as untyped JSON, if it is JSON
    #[must_use]
    pub fn body_json(&self) -> Option<serde_json::Value> {
        serde_json::from_slice(&self.body).ok()
    }
}

/// Error raised inside a middleware hook
///
/// A failing `before_request` aborts the request; failures in the other
/// hooks are logged and do not disturb the pipeline.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct MiddlewareError(pub String);

impl MiddlewareError {
    /// Build an error from any displayable cause
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Interceptor attached to the transport client's request lifecycle
///
/// All hooks default to pass-through, so a middleware implements only the
/// subset it needs. Hooks run in registration order.
pub trait Middleware: Send + Sync {
    /// Called before the request is sent; may mutate the context
    ///
    /// # Errors
    ///
    /// Returning an error aborts the request before it reaches the network.
    fn before_request(&self, ctx: &mut RequestContext) -> Result<(), MiddlewareError> {
        let _ = ctx;
        Ok(())
    }

    /// Called after a successful (2xx) response
    ///
    /// # Errors
    ///
    /// Errors are logged by the client and do not affect the response.
    fn after_response(
        &self,
        response: &ResponseInfo,
        ctx: &RequestContext,
    ) -> Result<(), MiddlewareError> {
        let _ = (response, ctx);
        Ok(())
    }

    /// Called for every non-cancelled failure, before it reaches the caller
    ///
    /// # Errors
    ///
    /// Errors are logged by the client and do not prevent later middlewares
    /// from running, nor do they change the error returned to the caller.
    fn on_error(&self, error: &HttpError, ctx: &RequestContext) -> Result<(), MiddlewareError> {
        let _ = (error, ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_both_toasts() {
        let options = RequestOptions::default();
        assert!(options.show_success_toast);
        assert!(options.show_error_toast);
        assert_eq!(options.success_message, None);
        assert_eq!(options.error_message, None);
    }

    #[test]
    fn silent_success_keeps_error_toast() {
        let options = RequestOptions::silent_success();
        assert!(!options.show_success_toast);
        assert!(options.show_error_toast);
    }

    #[test]
    fn builders_compose() {
        let options = RequestOptions::new()
            .with_success_message("Created")
            .with_error_message("Nope")
            .without_error_toast();
        assert_eq!(options.success_message.as_deref(), Some("Created"));
        assert_eq!(options.error_message.as_deref(), Some("Nope"));
        assert!(!options.show_error_toast);
    }

    #[test]
    fn response_info_exposes_json_body() {
        let info = ResponseInfo {
            status: StatusCode::OK,
            body: b"{\"id\": \"9\"}".to_vec(),
        };
        let json = info.body_json();
        assert_eq!(
            json.and_then(|v| v.get("id").cloned()),
            Some(serde_json::Value::String("9".to_string()))
        );
    }
}
