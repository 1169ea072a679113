//! Resume records and container state.

use crate::user::{User, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a resume, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub String);

impl ResumeId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ResumeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resume record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Backend-issued id.
    pub id: ResumeId,
    /// Where the stored file can be fetched from.
    pub url: String,
    /// Filename as uploaded by the user.
    pub original_file_name: String,
    /// Filename under which the backend stored the file.
    pub file_name: String,
    /// Owning user.
    pub user_id: UserId,
    /// The owner, pre-populated by the backend.
    #[serde(default)]
    pub user: Option<User>,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
}

/// A file to upload as a resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    /// Original filename, forwarded to the backend.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Build an upload from a filename and its contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Client-side cache of resumes and its request lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeState {
    /// Resumes from the last list fetch (all, or one user's).
    pub list: Vec<Resume>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared on the next command.
    pub error: Option<String>,
    /// Tag of the latest issued list fetch.
    pub fetch_seq: u64,
    /// When the list was last refreshed from the backend.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ResumeState {
    /// Whether the cached list is older than `ttl` (or was never fetched).
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at.is_none_or(|at| now - at > ttl)
    }
}
