//! Client configuration
//!
//! The composition root for the Evalix client: one base URL, one durable
//! token storage, one notifier, and per-service timeouts. Everything else
//! (session, transport clients, services) is derived from this in
//! [`AppEnvironment::from_config`](crate::app::AppEnvironment::from_config).

use evalix_http::{CancelSignal, MemoryTokenStorage, NoopNotifier, Notifier, TokenStorage};
use std::sync::Arc;
use std::time::Duration;

/// Timeout for user endpoints
pub const USER_TIMEOUT: Duration = Duration::from_secs(5);
/// Timeout for skill endpoints
pub const SKILL_TIMEOUT: Duration = Duration::from_secs(3);
/// Timeout for vacancy endpoints
pub const VACANCY_TIMEOUT: Duration = Duration::from_secs(3);
/// Timeout for resume endpoints (uploads carry file bodies)
pub const RESUME_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for evaluation endpoints (creation triggers server-side analysis)
pub const EVALUATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Top-level configuration for the Evalix client
#[derive(Clone)]
pub struct EvalixConfig {
    /// Backend base URL
    pub base_url: String,
    /// Durable storage for the session bearer token
    pub token_storage: Arc<dyn TokenStorage>,
    /// Sink for user-visible notifications
    pub notifier: Arc<dyn Notifier>,
    /// Cancellation signal shared by every client, when the caller wants one
    pub cancel: Option<CancelSignal>,
}

impl EvalixConfig {
    /// Configuration with in-memory token storage and no notifications
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token_storage: Arc::new(MemoryTokenStorage::new()),
            notifier: Arc::new(NoopNotifier),
            cancel: None,
        }
    }

    /// Use the given durable token storage
    #[must_use]
    pub fn with_token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.token_storage = storage;
        self
    }

    /// Route notifications to the given sink
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Bind every request to a cancellation signal
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl std::fmt::Debug for EvalixConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvalixConfig")
            .field("base_url", &self.base_url)
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}
