//! User-visible notifications
//!
//! The notification middleware translates request outcomes into transient
//! messages without embedding that policy into each service call. It talks
//! to an injected [`Notifier`] so the transport layer has no direct UI
//! dependency; headless environments (tests, scripts) use [`NoopNotifier`].

use crate::error::HttpError;
use crate::middleware::{Middleware, MiddlewareError, RequestContext, ResponseInfo};
use std::sync::Arc;
use std::time::Duration;

/// Identifier of an emitted notification, usable to dismiss it later
pub type NotificationId = String;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Neutral information
    Info,
    /// Something needs attention but nothing failed
    Warning,
}

impl NotificationKind {
    /// The kind as a lowercase string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for user-visible transient messages
///
/// Registered once at application bootstrap and injected wherever
/// notifications are emitted.
pub trait Notifier: Send + Sync {
    /// Emit a notification and return its id
    fn notify(
        &self,
        message: &str,
        kind: NotificationKind,
        duration: Option<Duration>,
    ) -> NotificationId;
}

/// Notifier that discards every message
///
/// Default for environments with no UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(
        &self,
        _message: &str,
        _kind: NotificationKind,
        _duration: Option<Duration>,
    ) -> NotificationId {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Direct-emission fallback that writes notifications to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(
        &self,
        message: &str,
        kind: NotificationKind,
        _duration: Option<Duration>,
    ) -> NotificationId {
        match kind {
            NotificationKind::Error => tracing::error!(kind = %kind, "{message}"),
            NotificationKind::Warning => tracing::warn!(kind = %kind, "{message}"),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(kind = %kind, "{message}");
            },
        }
        uuid::Uuid::new_v4().to_string()
    }
}

/// Middleware that raises success/error notifications for HTTP requests
///
/// Per-request behavior is controlled by
/// [`RequestOptions`](crate::middleware::RequestOptions); constructor-level
/// defaults fill in when a request does not override the messages.
pub struct NotificationMiddleware {
    notifier: Arc<dyn Notifier>,
    default_success_message: String,
    default_error_message: String,
}

impl NotificationMiddleware {
    /// Create the middleware with the standard default messages
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            notifier,
            default_success_message: "Success".to_string(),
            default_error_message: "Error".to_string(),
        }
    }

    /// Create the middleware with custom default messages
    #[must_use]
    pub fn with_defaults(
        notifier: Arc<dyn Notifier>,
        success: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            notifier,
            default_success_message: success.unwrap_or_else(|| "Success".to_string()),
            default_error_message: error.unwrap_or_else(|| "Error".to_string()),
        }
    }

    /// Replace the default messages
    pub fn set_default_messages(&mut self, success: Option<String>, error: Option<String>) {
        if let Some(success) = success {
            self.default_success_message = success;
        }
        if let Some(error) = error {
            self.default_error_message = error;
        }
    }
}

impl Middleware for NotificationMiddleware {
    fn after_response(
        &self,
        _response: &ResponseInfo,
        ctx: &RequestContext,
    ) -> Result<(), MiddlewareError> {
        if ctx.options.show_success_toast {
            let message = ctx
                .options
                .success_message
                .as_deref()
                .unwrap_or(&self.default_success_message);
            self.notifier.notify(message, NotificationKind::Success, None);
        }
        Ok(())
    }

    fn on_error(&self, error: &HttpError, ctx: &RequestContext) -> Result<(), MiddlewareError> {
        if ctx.options.show_error_toast {
            // Most specific message wins: body `message` > body `error` >
            // per-request override > middleware default.
            let message = error.response_message().unwrap_or_else(|| {
                ctx.options
                    .error_message
                    .as_deref()
                    .unwrap_or(&self.default_error_message)
            });
            self.notifier.notify(message, NotificationKind::Error, None);
        }
        Ok(())
    }
}
