//! # Evalix HTTP
//!
//! HTTP transport for the Evalix client: a thin wrapper over `reqwest` with
//! bearer-token sessions, per-request cancellation, and an ordered
//! middleware pipeline for cross-cutting request/response behavior.
//!
//! ## Components
//!
//! - [`HttpClient`]: typed verbs (`get`/`post`/`put`/`delete`/`upload`) that
//!   decode JSON responses and route every outcome through the middleware
//!   pipeline
//! - [`Middleware`]: `before_request` / `after_response` / `on_error` hooks,
//!   invoked in registration order
//! - [`NotificationMiddleware`]: translates request outcomes into transient
//!   user notifications via an injected [`Notifier`]
//! - [`Session`]: the bearer token, backed by durable [`TokenStorage`]
//! - [`cancel_pair`]: cancellation handles for aborting in-flight requests
//!
//! ## Example
//!
//! ```no_run
//! use evalix_http::{HttpClientOptions, Session, create_http_client};
//! use evalix_http::{NoopNotifier, RequestOptions};
//! use std::sync::Arc;
//!
//! # #[derive(serde::Deserialize)] struct Skill { id: String, title: String }
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Session::in_memory();
//!     let client = create_http_client(
//!         HttpClientOptions::new("https://api.example.com"),
//!         session,
//!         Arc::new(NoopNotifier),
//!     )?;
//!
//!     let skills: Vec<Skill> = client
//!         .get("/skills/v1/skill/get-all", RequestOptions::silent_success())
//!         .await?;
//!     println!("{} skills", skills.len());
//!     Ok(())
//! }
//! ```

pub mod cancel;
pub mod client;
pub mod error;
pub mod factory;
pub mod middleware;
pub mod notification;
pub mod session;

// Re-export main types for convenience
pub use cancel::{CancelHandle, CancelSignal, cancel_pair};
pub use client::{FilePart, HttpClient, HttpConfig};
pub use error::{ErrorEnvelope, HttpError, Result};
pub use factory::{HttpClientOptions, create_http_client};
pub use middleware::{Middleware, MiddlewareError, RequestContext, RequestOptions, ResponseInfo};
pub use notification::{
    LogNotifier, NoopNotifier, NotificationId, NotificationKind, NotificationMiddleware, Notifier,
};
pub use session::{FileTokenStorage, MemoryTokenStorage, Session, TokenStorage};
