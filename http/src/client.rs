//! HTTP transport client
//!
//! Single point of outbound communication: consistent bearer-token
//! authorization, per-request cancellation, JSON decoding, and the
//! middleware pipeline folded around every call.

use crate::cancel::CancelSignal;
use crate::error::{ErrorEnvelope, HttpError, Result};
use crate::middleware::{Middleware, RequestContext, RequestOptions, ResponseInfo};
use crate::notification::{LogNotifier, NotificationMiddleware};
use crate::session::Session;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Default per-client request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Base configuration for a transport client
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL prefixed to every request path
    pub base_url: String,
    /// Fixed per-client timeout applied to every request
    pub timeout: Duration,
    /// Default headers (JSON content-type and accept unless overridden)
    pub headers: HeaderMap,
}

impl HttpConfig {
    /// Configuration with the JSON defaults and a 3 second timeout
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            headers,
        }
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One file in a multipart upload
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Original filename, forwarded to the backend
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Build a part from a filename and its contents
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(reqwest::multipart::Form),
}

/// The transport client
///
/// Holds the shared [`Session`], the ordered middleware list, and an
/// optional cancellation signal bound to the lifetime of the logical
/// operation that constructed the client.
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
    session: Session,
    middlewares: Vec<Arc<dyn Middleware>>,
    cancel: Option<CancelSignal>,
}

impl HttpClient {
    /// Create a client
    ///
    /// An empty middleware list installs a [`NotificationMiddleware`] with
    /// default messages over the direct-emission [`LogNotifier`], so every
    /// client has baseline user feedback.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the underlying HTTP client
    /// cannot be built from the configuration.
    pub fn new(
        config: HttpConfig,
        session: Session,
        middlewares: Vec<Arc<dyn Middleware>>,
        cancel: Option<CancelSignal>,
    ) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(config.headers)
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        let middlewares = if middlewares.is_empty() {
            vec![Arc::new(NotificationMiddleware::new(Arc::new(LogNotifier))) as Arc<dyn Middleware>]
        } else {
            middlewares
        };

        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            middlewares,
            cancel,
        })
    }

    /// The session shared by this client
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// GET a resource
    ///
    /// # Errors
    ///
    /// Returns the transport error taxonomy of [`HttpError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        self.request(Method::GET, path, RequestBody::Empty, &[], options)
            .await
    }

    /// POST a JSON body
    ///
    /// # Errors
    ///
    /// Returns the transport error taxonomy of [`HttpError`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        self.request(Method::POST, path, RequestBody::Json(body), &[], options)
            .await
    }

    /// PUT a JSON body
    ///
    /// # Errors
    ///
    /// Returns the transport error taxonomy of [`HttpError`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        options: RequestOptions,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        self.request(Method::PUT, path, RequestBody::Json(body), &[], options)
            .await
    }

    /// DELETE a resource
    ///
    /// # Errors
    ///
    /// Returns the transport error taxonomy of [`HttpError`].
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        self.request(Method::DELETE, path, RequestBody::Empty, &[], options)
            .await
    }

    /// POST a multipart form built from one or more files
    ///
    /// A single file is sent under the `file` part name, several under
    /// `files`. Scalar companions become text parts; `query` pairs go on
    /// the URL. The multipart content type applies to this request only and
    /// never mutates the client's default headers.
    ///
    /// # Errors
    ///
    /// Returns the transport error taxonomy of [`HttpError`].
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        files: Vec<FilePart>,
        fields: &[(&str, String)],
        query: &[(&str, String)],
        options: RequestOptions,
    ) -> Result<T> {
        let mut form = reqwest::multipart::Form::new();
        let many = files.len() > 1;
        for file in files {
            let part =
                reqwest::multipart::Part::bytes(file.bytes).file_name(file.file_name.clone());
            form = form.part(if many { "files" } else { "file" }, part);
        }
        for (name, value) in fields {
            form = form.text((*name).to_string(), value.clone());
        }

        self.request(Method::POST, path, RequestBody::Multipart(form), query, options)
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        query: &[(&str, String)],
        options: RequestOptions,
    ) -> Result<T> {
        let mut ctx = RequestContext::new(method.clone(), path, options);
        for middleware in &self.middlewares {
            middleware
                .before_request(&mut ctx)
                .map_err(|e| HttpError::Middleware(e.to_string()))?;
        }

        let outcome = match &self.cancel {
            Some(signal) => tokio::select! {
                outcome = self.perform(method, &ctx.path, body, query) => outcome,
                () = signal.cancelled() => {
                    tracing::info!(path = %ctx.path, "request was cancelled");
                    return Err(HttpError::Cancelled);
                }
            },
            None => self.perform(method, &ctx.path, body, query).await,
        };

        let info = match outcome {
            Ok(info) => info,
            Err(error) => return self.fail(error, &ctx),
        };

        if !info.status.is_success() {
            if info.status == StatusCode::UNAUTHORIZED {
                tracing::error!(path = %ctx.path, "unauthorized request");
            }
            let error = HttpError::Status {
                status: info.status.as_u16(),
                envelope: ErrorEnvelope::from_body(&info.body),
            };
            return self.fail(error, &ctx);
        }

        for middleware in &self.middlewares {
            if let Err(e) = middleware.after_response(&info, &ctx) {
                tracing::warn!(error = %e, path = %ctx.path, "response middleware failed");
            }
        }

        // An empty body decodes as JSON null, which covers delete
        // endpoints that return nothing.
        let bytes: &[u8] = if info.body.is_empty() { b"null" } else { &info.body };
        match serde_json::from_slice(bytes) {
            Ok(value) => Ok(value),
            Err(e) => self.fail(HttpError::Decode(e.to_string()), &ctx),
        }
    }

    async fn perform(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        query: &[(&str, String)],
    ) -> Result<ResponseInfo> {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.inner.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let token = self.session.token();
        if !token.is_empty() {
            builder = builder.bearer_auth(token);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "request failed");
            HttpError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Transport(e.to_string()))?
            .to_vec();

        Ok(ResponseInfo { status, body })
    }

    /// Route a failure through every error hook, then hand it to the caller
    fn fail<T>(&self, error: HttpError, ctx: &RequestContext) -> Result<T> {
        for middleware in &self.middlewares {
            if let Err(e) = middleware.on_error(&error, ctx) {
                tracing::warn!(error = %e, path = %ctx.path, "error middleware failed");
            }
        }
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_json_headers() {
        let config = HttpConfig::new("http://localhost:5296");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(
            config.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        assert_eq!(
            config.headers.get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = HttpClient::new(
            HttpConfig::new("http://localhost:5296/"),
            Session::in_memory(),
            Vec::new(),
            None,
        );
        let Ok(client) = client else {
            unreachable!("client construction from valid config succeeds");
        };
        assert_eq!(client.base_url, "http://localhost:5296");
    }

    #[test]
    fn file_part_keeps_name_and_bytes() {
        let part = FilePart::new("resume.pdf", vec![1, 2, 3]);
        assert_eq!(part.file_name, "resume.pdf");
        assert_eq!(part.bytes, vec![1, 2, 3]);
    }
}
