//! Client factory
//!
//! Builds a transport client wired with the notification middleware, the
//! way every resource service obtains its client.

use crate::cancel::CancelSignal;
use crate::client::{HttpClient, HttpConfig};
use crate::error::Result;
use crate::middleware::Middleware;
use crate::notification::{NotificationMiddleware, Notifier};
use crate::session::Session;
use std::sync::Arc;
use std::time::Duration;

/// Options for creating an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct HttpClientOptions {
    /// Base URL prefixed to every request path
    pub base_url: String,
    /// Per-client request timeout
    pub timeout: Duration,
    /// Default success message for the notification middleware
    pub default_success_message: Option<String>,
    /// Default error message for the notification middleware
    pub default_error_message: Option<String>,
    /// Cancellation signal shared by every request of this client
    pub cancel: Option<CancelSignal>,
}

impl HttpClientOptions {
    /// Options with the default timeout and messages
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: crate::client::DEFAULT_TIMEOUT,
            default_success_message: None,
            default_error_message: None,
            cancel: None,
        }
    }

    /// Override the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the notification middleware's default messages
    #[must_use]
    pub fn with_default_messages(
        mut self,
        success: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        self.default_success_message = Some(success.into());
        self.default_error_message = Some(error.into());
        self
    }

    /// Bind every request of this client to a cancellation signal
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Create an [`HttpClient`] with a notification middleware installed
///
/// # Errors
///
/// Returns [`crate::HttpError::Transport`] if the underlying HTTP client
/// cannot be built.
pub fn create_http_client(
    options: HttpClientOptions,
    session: Session,
    notifier: Arc<dyn Notifier>,
) -> Result<HttpClient> {
    let middleware = NotificationMiddleware::with_defaults(
        notifier,
        options.default_success_message,
        options.default_error_message,
    );

    HttpClient::new(
        HttpConfig::new(options.base_url).with_timeout(options.timeout),
        session,
        vec![Arc::new(middleware) as Arc<dyn Middleware>],
        options.cancel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NoopNotifier;

    #[test]
    fn factory_builds_a_client() {
        let client = create_http_client(
            HttpClientOptions::new("http://localhost:5296")
                .with_timeout(Duration::from_secs(30))
                .with_default_messages("Success", "Error"),
            Session::in_memory(),
            Arc::new(NoopNotifier),
        );
        assert!(client.is_ok());
    }
}
