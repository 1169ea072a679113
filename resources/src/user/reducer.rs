//! Reducer for the user container.

use super::actions::{CurrentUserSource, UserAction};
use super::service::UserService;
use super::state::{AuthenticatedUser, Role, User, UserId, UserState};
use crate::jwt;
use evalix_core::effect::Effect;
use evalix_core::environment::Clock;
use evalix_core::reducer::Reducer;
use evalix_core::{SmallVec, smallvec};
use evalix_http::Session;
use std::sync::Arc;

/// Environment dependencies for the user container.
#[derive(Clone)]
pub struct UserEnvironment {
    /// REST service for user endpoints.
    pub service: Arc<UserService>,
    /// Clock used to stamp list refreshes and provisional profiles.
    pub clock: Arc<dyn Clock>,
    /// The session whose token login and logout maintain.
    pub session: Session,
}

impl UserEnvironment {
    /// Creates a new `UserEnvironment`.
    #[must_use]
    pub fn new(service: Arc<UserService>, clock: Arc<dyn Clock>, session: Session) -> Self {
        Self {
            service,
            clock,
            session,
        }
    }
}

/// Reducer for the user container.
#[derive(Clone, Debug, Default)]
pub struct UserReducer;

impl UserReducer {
    /// Creates a new `UserReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Seed a provisional profile from the token's identity claims.
    fn user_from_token(token: &str, env: &UserEnvironment) -> Option<AuthenticatedUser> {
        let claims = jwt::decode_claims(token)?;
        let name = claims.unique_name.unwrap_or_default();
        let role = claims.role.unwrap_or_default();
        Some(AuthenticatedUser {
            user: User {
                id: UserId::new(claims.sub.unwrap_or_default()),
                first_name: name.clone(),
                username: name,
                email: claims.email.unwrap_or_default(),
                updated_at: env.clock.now(),
                role_id: role.clone(),
                role: Role {
                    id: role.clone(),
                    title: if role.is_empty() { "User".to_string() } else { role },
                },
            },
            token: token.to_string(),
        })
    }

    /// Effect that writes the token to the shared session.
    fn persist_token(env: &UserEnvironment, token: Option<String>) -> Effect<UserAction> {
        let session = env.session.clone();
        Effect::future(async move {
            session.set_token(token.as_deref());
            None
        })
    }
}

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;
    type Environment = UserEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            UserAction::FetchAll => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_all().await {
                        Ok(users) => UserAction::Fetched { seq, users },
                        Err(e) => UserAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            UserAction::FetchById { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_by_id(&id).await {
                        Ok(user) => UserAction::FetchedById { user },
                        Err(e) => UserAction::FetchByIdFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            UserAction::GoogleAuth { credential } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.google_auth(&credential).await {
                        Ok(user) => UserAction::GoogleAuthSucceeded { user },
                        Err(e) => UserAction::GoogleAuthFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            UserAction::SetCurrentUser { source } => match source {
                None => {
                    state.current_user = None;
                    smallvec![Self::persist_token(env, None)]
                },
                Some(CurrentUserSource::Token(token)) => {
                    // The token is persisted even when its claims are
                    // unreadable; the backend is the judge of validity.
                    if let Some(user) = Self::user_from_token(&token, env) {
                        state.current_user = Some(user);
                    }
                    smallvec![Self::persist_token(env, Some(token))]
                },
                Some(CurrentUserSource::Profile(user)) => {
                    let token = user.token.clone();
                    state.current_user = Some(user);
                    smallvec![Self::persist_token(env, Some(token))]
                },
            },

            // ========== Events ==========
            UserAction::Fetched { seq, users } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale user fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = None;
                state.list = users;
                state.fetched_at = Some(env.clock.now());
                SmallVec::new()
            },

            UserAction::FetchFailed { seq, error } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale user fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },

            UserAction::FetchedById { user } => {
                state.loading = false;
                state.error = None;
                if let Some(existing) = state.list.iter_mut().find(|u| u.id == user.id) {
                    *existing = user.clone();
                }
                // The authoritative profile replaces the claim-seeded one,
                // keeping the token.
                if let Some(current) = state.current_user.as_mut() {
                    if current.user.id == user.id {
                        current.user = user;
                    }
                }
                SmallVec::new()
            },

            UserAction::GoogleAuthSucceeded { user } => {
                state.loading = false;
                state.error = None;
                let token = user.token.clone();
                state.current_user = Some(user);
                smallvec![Self::persist_token(env, Some(token))]
            },

            UserAction::FetchByIdFailed { error } | UserAction::GoogleAuthFailed { error } => {
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::state::GoogleCredential;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use chrono::Utc;
    use evalix_http::{HttpClient, HttpConfig, Session};
    use evalix_testing::{ReducerTest, assertions, mocks::test_clock};

    fn test_env() -> UserEnvironment {
        let session = Session::in_memory();
        let client = HttpClient::new(
            HttpConfig::new("http://localhost:0"),
            session.clone(),
            Vec::new(),
            None,
        )
        .unwrap_or_else(|e| unreachable!("client construction failed: {e}"));
        UserEnvironment::new(
            Arc::new(UserService::new(client)),
            Arc::new(test_clock()),
            session,
        )
    }

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            first_name: name.to_string(),
            username: name.to_string(),
            email: format!("{name}@example.com"),
            updated_at: Utc::now(),
            role_id: "r1".to_string(),
            role: Role {
                id: "r1".to_string(),
                title: "User".to_string(),
            },
        }
    }

    fn identity_token() -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"none\"}");
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::json!({
                "sub": "u1",
                "unique_name": "Ada",
                "email": "ada@example.com",
                "role": "admin",
            })
            .to_string(),
        );
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn set_current_user_from_token_seeds_claims() {
        ReducerTest::new(UserReducer::new())
            .with_env(test_env())
            .given_state(UserState::default())
            .when_action(UserAction::SetCurrentUser {
                source: Some(CurrentUserSource::Token(identity_token())),
            })
            .then_state(|state| {
                let current = state.current_user.as_ref();
                let Some(current) = current else {
                    unreachable!("claims seed the current user");
                };
                assert_eq!(current.user.id, UserId::new("u1"));
                assert_eq!(current.user.username, "Ada");
                assert_eq!(current.user.email, "ada@example.com");
                assert_eq!(current.user.role.title, "admin");
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn unreadable_token_still_produces_persist_effect() {
        ReducerTest::new(UserReducer::new())
            .with_env(test_env())
            .given_state(UserState::default())
            .when_action(UserAction::SetCurrentUser {
                source: Some(CurrentUserSource::Token("garbage".to_string())),
            })
            .then_state(|state| assert!(state.current_user.is_none()))
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn logout_clears_current_user() {
        let mut state = UserState::default();
        let env = test_env();
        let reducer = UserReducer::new();

        reducer.reduce(
            &mut state,
            UserAction::GoogleAuthSucceeded {
                user: AuthenticatedUser {
                    user: user("u1", "Ada"),
                    token: "abc".to_string(),
                },
            },
            &env,
        );
        assert!(state.is_authenticated());

        let effects = reducer.reduce(&mut state, UserAction::SetCurrentUser { source: None }, &env);
        assert!(!state.is_authenticated());
        assertions::assert_has_future_effect(&effects);
    }

    #[test]
    fn authoritative_profile_keeps_token() {
        let mut state = UserState {
            current_user: Some(AuthenticatedUser {
                user: user("u1", "Provisional"),
                token: "abc".to_string(),
            }),
            list: vec![user("u1", "Provisional"), user("u2", "Other")],
            ..UserState::default()
        };
        let env = test_env();

        UserReducer::new().reduce(
            &mut state,
            UserAction::FetchedById {
                user: user("u1", "Ada"),
            },
            &env,
        );

        let Some(current) = state.current_user.as_ref() else {
            unreachable!("current user survives the profile fetch");
        };
        assert_eq!(current.user.first_name, "Ada");
        assert_eq!(current.token, "abc");
        assert_eq!(state.list[0].first_name, "Ada");
        assert_eq!(state.list[1].first_name, "Other");
    }

    #[test]
    fn google_auth_command_issues_request() {
        ReducerTest::new(UserReducer::new())
            .with_env(test_env())
            .given_state(UserState::default())
            .when_action(UserAction::GoogleAuth {
                credential: GoogleCredential {
                    token: "provider-credential".to_string(),
                },
            })
            .then_state(|state| {
                assert!(state.loading);
                assert_eq!(state.error, None);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }

    #[test]
    fn failed_auth_records_error() {
        let mut state = UserState::default();
        let env = test_env();

        UserReducer::new().reduce(
            &mut state,
            UserAction::GoogleAuthFailed {
                error: "Failed to authenticate with Google".to_string(),
            },
            &env,
        );

        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to authenticate with Google")
        );
        assert!(state.current_user.is_none());
    }
}
