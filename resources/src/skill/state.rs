//! Skill records and container state.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a skill, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub String);

impl SkillId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for SkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A skill record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Backend-issued id.
    pub id: SkillId,
    /// Skill name.
    pub title: String,
}

/// Payload for creating a skill; the backend issues the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    /// Skill name.
    pub title: String,
}

/// Client-side cache of skills and its request lifecycle.
///
/// `loading` is true strictly between a command dispatch and its settle.
/// `fetch_seq` tags list-replacing fetches so the settle of a superseded
/// fetch is ignored instead of overwriting fresher data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillState {
    /// All known skills, in fetch order.
    pub list: Vec<Skill>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared on the next command.
    pub error: Option<String>,
    /// Tag of the latest issued list fetch.
    pub fetch_seq: u64,
    /// When the list was last refreshed from the backend.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl SkillState {
    /// Whether the cached list is older than `ttl` (or was never fetched).
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at.is_none_or(|at| now - at > ttl)
    }
}
