//! Evaluation records and container state.

use crate::resume::{Resume, ResumeId};
use crate::vacancy::{Vacancy, VacancyId};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an evaluation, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationId(pub String);

impl EvaluationId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for EvaluationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An evaluation record linking a resume to a vacancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Backend-issued id.
    pub id: EvaluationId,
    /// Analysis commentary.
    pub comment: String,
    /// Match score, as the backend reports it.
    pub score: String,
    /// The evaluated resume.
    pub resume_id: ResumeId,
    /// The vacancy it was evaluated against.
    pub vacancy_id: VacancyId,
    /// The resume, pre-populated by the backend.
    #[serde(default)]
    pub resume: Option<Resume>,
    /// The vacancy, pre-populated by the backend.
    #[serde(default)]
    pub vacancy: Option<Vacancy>,
}

/// Payload for requesting an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvaluation {
    /// The resume to evaluate.
    pub resume_id: ResumeId,
    /// The vacancy to evaluate against.
    pub vacancy_id: VacancyId,
}

/// Client-side cache of evaluations and its request lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationState {
    /// Evaluations from the last list fetch (all, or one filter's).
    pub list: Vec<Evaluation>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared on the next command.
    pub error: Option<String>,
    /// Tag of the latest issued list fetch.
    pub fetch_seq: u64,
    /// When the list was last refreshed from the backend.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl EvaluationState {
    /// Whether the cached list is older than `ttl` (or was never fetched).
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at.is_none_or(|at| now - at > ttl)
    }
}
