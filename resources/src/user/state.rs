//! User records and container state.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user, issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Wrap a backend-issued id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Backend-issued role id.
    pub id: String,
    /// Role name.
    pub title: String,
}

/// A user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-issued id.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Last profile update.
    pub updated_at: DateTime<Utc>,
    /// Foreign key to the role.
    pub role_id: String,
    /// The role, pre-populated by the backend.
    pub role: Role,
}

/// The logged-in user together with the bearer token issued for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// The user profile.
    #[serde(flatten)]
    pub user: User,
    /// Application-issued bearer token.
    pub token: String,
}

/// Opaque credential produced by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCredential {
    /// The provider's identity token.
    pub token: String,
}

/// Client-side cache of users and the authenticated session holder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    /// All known users, in fetch order.
    pub list: Vec<User>,
    /// The logged-in user, if any.
    pub current_user: Option<AuthenticatedUser>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Message of the last failed request, cleared on the next command.
    pub error: Option<String>,
    /// Tag of the latest issued list fetch.
    pub fetch_seq: u64,
    /// When the list was last refreshed from the backend.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl UserState {
    /// Whether the cached list is older than `ttl` (or was never fetched).
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.fetched_at.is_none_or(|at| now - at > ttl)
    }

    /// Whether someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
