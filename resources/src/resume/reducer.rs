//! Reducer for the resume container.

use super::actions::ResumeAction;
use super::service::ResumeService;
use super::state::ResumeState;
use evalix_core::effect::Effect;
use evalix_core::environment::Clock;
use evalix_core::reducer::Reducer;
use evalix_core::{SmallVec, smallvec};
use std::sync::Arc;

/// Environment dependencies for the resume container.
#[derive(Clone)]
pub struct ResumeEnvironment {
    /// REST service for resume endpoints.
    pub service: Arc<ResumeService>,
    /// Clock used to stamp list refreshes.
    pub clock: Arc<dyn Clock>,
}

impl ResumeEnvironment {
    /// Creates a new `ResumeEnvironment`.
    #[must_use]
    pub fn new(service: Arc<ResumeService>, clock: Arc<dyn Clock>) -> Self {
        Self { service, clock }
    }
}

/// Reducer for the resume container.
#[derive(Clone, Debug, Default)]
pub struct ResumeReducer;

impl ResumeReducer {
    /// Creates a new `ResumeReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for ResumeReducer {
    type State = ResumeState;
    type Action = ResumeAction;
    type Environment = ResumeEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            ResumeAction::FetchAll => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_all().await {
                        Ok(resumes) => ResumeAction::Fetched { seq, resumes },
                        Err(e) => ResumeAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            ResumeAction::FetchByUserId { user_id } => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_by_user_id(&user_id).await {
                        Ok(resumes) => ResumeAction::Fetched { seq, resumes },
                        Err(e) => ResumeAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            ResumeAction::Upload { upload, user_id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.create(upload, &user_id).await {
                        Ok(resume) => ResumeAction::Uploaded { resume },
                        Err(e) => ResumeAction::UploadFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            ResumeAction::Delete { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete(&id).await {
                        Ok(()) => ResumeAction::Deleted { id },
                        Err(e) => ResumeAction::DeleteFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            // ========== Events ==========
            ResumeAction::Fetched { seq, resumes } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale resume fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = None;
                state.list = resumes;
                state.fetched_at = Some(env.clock.now());
                SmallVec::new()
            },

            ResumeAction::FetchFailed { seq, error } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale resume fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },

            ResumeAction::Uploaded { resume } => {
                state.loading = false;
                state.error = None;
                state.list.push(resume);
                SmallVec::new()
            },

            ResumeAction::Deleted { id } => {
                state.loading = false;
                state.error = None;
                state.list.retain(|r| r.id != id);
                SmallVec::new()
            },

            ResumeAction::UploadFailed { error } | ResumeAction::DeleteFailed { error } => {
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
    use crate::resume::state::{Resume, ResumeId, ResumeUpload};
    use crate::user::UserId;
    use chrono::Utc;
    use evalix_http::{HttpClient, HttpConfig, Session};
    use evalix_testing::{ReducerTest, assertions, mocks::test_clock};

    fn test_env() -> ResumeEnvironment {
        let client = HttpClient::new(
            HttpConfig::new("http://localhost:0"),
            Session::in_memory(),
            Vec::new(),
            None,
        )
        .unwrap_or_else(|e| unreachable!("client construction failed: {e}"));
        ResumeEnvironment::new(Arc::new(ResumeService::new(client)), Arc::new(test_clock()))
    }

    fn resume(id: &str) -> Resume {
        Resume {
            id: ResumeId::new(id),
            url: format!("https://files.example.com/{id}.pdf"),
            original_file_name: "cv.pdf".to_string(),
            file_name: format!("{id}.pdf"),
            user_id: UserId::new("u1"),
            user: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn filtered_fetch_replaces_list_wholesale() {
        let env = test_env();
        let reducer = ResumeReducer::new();
        let mut state = ResumeState {
            list: vec![resume("r1"), resume("r2")],
            ..ResumeState::default()
        };

        reducer.reduce(
            &mut state,
            ResumeAction::FetchByUserId {
                user_id: UserId::new("u1"),
            },
            &env,
        );
        assert!(state.loading);

        let seq = state.fetch_seq;
        reducer.reduce(
            &mut state,
            ResumeAction::Fetched {
                seq,
                resumes: vec![resume("r3")],
            },
            &env,
        );

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.list[0].id, ResumeId::new("r3"));
        assert!(!state.loading);
    }

    #[test]
    fn upload_command_issues_request_and_appends_on_settle() {
        ReducerTest::new(ResumeReducer::new())
            .with_env(test_env())
            .given_state(ResumeState::default())
            .when_action(ResumeAction::Upload {
                upload: ResumeUpload::new("cv.pdf", b"%PDF-1.4".to_vec()),
                user_id: UserId::new("u1"),
            })
            .then_state(|state| assert!(state.loading))
            .then_effects(assertions::assert_has_future_effect)
            .run();

        let env = test_env();
        let mut state = ResumeState::default();
        ResumeReducer::new().reduce(
            &mut state,
            ResumeAction::Uploaded {
                resume: resume("r9"),
            },
            &env,
        );
        assert_eq!(state.list.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn delete_is_noop_when_absent() {
        let env = test_env();
        let mut state = ResumeState {
            list: vec![resume("r1")],
            ..ResumeState::default()
        };

        ResumeReducer::new().reduce(
            &mut state,
            ResumeAction::Deleted {
                id: ResumeId::new("missing"),
            },
            &env,
        );

        assert_eq!(state.list.len(), 1);
        assert_eq!(state.error, None);
    }
}
