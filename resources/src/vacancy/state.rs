//! Vacancy records and container state.

use crate::skill::SkillId;
use crate::user::{User, UserId};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a vacancy, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancyId(pub String);

impl VacancyId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for VacancyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a vacancy skill requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacancySkillId(pub String);

impl VacancySkillId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for VacancySkillId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human label for a skill requirement level (1–4).
#[must_use]
pub const fn level_label(level: u8) -> &'static str {
    match level {
        1 => "Beginner",
        2 => "Intermediate",
        3 => "Advanced",
        4 => "Expert",
        _ => "Unknown",
    }
}

/// One skill requirement embedded in a vacancy.
///
/// The join attribute of the vacancy ↔ skill relationship, carrying the
/// required level and years of experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancySkill {
    /// Backend-issued id of the requirement itself.
    #[serde(default)]
    pub id: Option<VacancySkillId>,
    /// The referenced skill.
    pub skill_id: SkillId,
    /// Skill name, denormalized by the backend.
    pub title: String,
    /// Required level, 1–4.
    #[serde(default)]
    pub level: Option<u8>,
    /// Required years of experience.
    #[serde(default)]
    pub experience: Option<u8>,
}

/// A vacancy record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    /// Backend-issued id.
    pub id: VacancyId,
    /// Position title.
    pub title: String,
    /// Position description.
    pub description: String,
    /// Required experience, free-form.
    pub experience: String,
    /// Required education, free-form.
    pub education: String,
    /// Owning user.
    pub user_id: UserId,
    /// The owner, pre-populated by the backend.
    #[serde(default)]
    pub user: Option<User>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Skill requirements.
    #[serde(default)]
    pub skills: Vec<VacancySkill>,
}

/// Payload for creating a vacancy; the backend issues the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVacancy {
    /// Position title.
    pub title: String,
    /// Position description.
    pub description: String,
    /// Required experience, free-form.
    pub experience: String,
    /// Required education, free-form.
    pub education: String,
    /// Owning user.
    pub user_id: UserId,
}

/// Payload for attaching a skill requirement to a vacancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVacancySkill {
    /// The vacancy to attach to.
    pub vacancy_id: VacancyId,
    /// The referenced skill.
    pub skill_id: SkillId,
    /// Required level, 1–4.
    pub level: u8,
    /// Required years of experience.
    pub experience: u8,
}

/// Payload for adjusting an existing skill requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancySkillPatch {
    /// Id of the requirement to adjust.
    pub id: VacancySkillId,
    /// Required level, 1–4.
    pub level: u8,
    /// Required years of experience.
    pub experience: u8,
}

/// Client-side cache of vacancies and its request lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VacancyState {
    /// All known vacancies, in fetch order.
    pub list: Vec<Vacancy>,
    /// Vacancy shown in the detail view, if any.
    pub current: Option<Vacancy>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared on the next command.
    pub error: Option<String>,
    /// Tag of the latest issued list fetch.
    pub fetch_seq: u64,
    /// When the list was last refreshed from the backend.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl VacancyState {
    /// Whether the cached list is older than `ttl` (or was never fetched).
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at.is_none_or(|at| now - at > ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_labels() {
        assert_eq!(level_label(1), "Beginner");
        assert_eq!(level_label(4), "Expert");
        assert_eq!(level_label(9), "Unknown");
    }

    #[test]
    fn vacancy_deserializes_without_optional_joins() {
        let json = serde_json::json!({
            "id": "v1",
            "title": "Backend Engineer",
            "description": "REST APIs",
            "experience": "3 years",
            "education": "BSc",
            "userId": "u1",
            "createdAt": "2025-01-01T00:00:00Z",
        });

        let vacancy: Result<Vacancy, _> = serde_json::from_value(json);
        let Ok(vacancy) = vacancy else {
            unreachable!("vacancy without joins deserializes");
        };
        assert_eq!(vacancy.user, None);
        assert!(vacancy.skills.is_empty());
    }
}
