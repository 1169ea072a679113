//! Reducer for the evaluation container.

use super::actions::EvaluationAction;
use super::service::EvaluationService;
use super::state::EvaluationState;
use evalix_core::effect::Effect;
use evalix_core::environment::Clock;
use evalix_core::reducer::Reducer;
use evalix_core::{SmallVec, smallvec};
use std::sync::Arc;

/// Environment dependencies for the evaluation container.
#[derive(Clone)]
pub struct EvaluationEnvironment {
    /// REST service for evaluation endpoints.
    pub service: Arc<EvaluationService>,
    /// Clock used to stamp list refreshes.
    pub clock: Arc<dyn Clock>,
}

impl EvaluationEnvironment {
    /// Creates a new `EvaluationEnvironment`.
    #[must_use]
    pub fn new(service: Arc<EvaluationService>, clock: Arc<dyn Clock>) -> Self {
        Self { service, clock }
    }
}

/// Reducer for the evaluation container.
#[derive(Clone, Debug, Default)]
pub struct EvaluationReducer;

impl EvaluationReducer {
    /// Creates a new `EvaluationReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for EvaluationReducer {
    type State = EvaluationState;
    type Action = EvaluationAction;
    type Environment = EvaluationEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            EvaluationAction::FetchAll => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_all().await {
                        Ok(evaluations) => EvaluationAction::Fetched { seq, evaluations },
                        Err(e) => EvaluationAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            EvaluationAction::FetchByVacancyId { vacancy_id } => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_by_vacancy_id(&vacancy_id).await {
                        Ok(evaluations) => EvaluationAction::Fetched { seq, evaluations },
                        Err(e) => EvaluationAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            EvaluationAction::FetchByResumeId { resume_id } => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_by_resume_id(&resume_id).await {
                        Ok(evaluations) => EvaluationAction::Fetched { seq, evaluations },
                        Err(e) => EvaluationAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            EvaluationAction::Create { evaluation } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.create(&evaluation).await {
                        Ok(evaluation) => EvaluationAction::Created { evaluation },
                        Err(e) => EvaluationAction::CreateFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            EvaluationAction::Delete { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete(&id).await {
                        Ok(()) => EvaluationAction::Deleted { id },
                        Err(e) => EvaluationAction::DeleteFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            // ========== Events ==========
            EvaluationAction::Fetched { seq, evaluations } => {
                if seq != state.fetch_seq {
                    tracing::debug!(
                        seq,
                        latest = state.fetch_seq,
                        "stale evaluation fetch ignored"
                    );
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = None;
                state.list = evaluations;
                state.fetched_at = Some(env.clock.now());
                SmallVec::new()
            },

            EvaluationAction::FetchFailed { seq, error } => {
                if seq != state.fetch_seq {
                    tracing::debug!(
                        seq,
                        latest = state.fetch_seq,
                        "stale evaluation fetch ignored"
                    );
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },

            EvaluationAction::Created { evaluation } => {
                state.loading = false;
                state.error = None;
                state.list.push(evaluation);
                SmallVec::new()
            },

            EvaluationAction::Deleted { id } => {
                state.loading = false;
                state.error = None;
                state.list.retain(|e| e.id != id);
                SmallVec::new()
            },

            EvaluationAction::CreateFailed { error } | EvaluationAction::DeleteFailed { error } => {
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
    use crate::evaluation::state::{Evaluation, EvaluationId, NewEvaluation};
    use crate::resume::ResumeId;
    use crate::vacancy::VacancyId;
    use evalix_http::{HttpClient, HttpConfig, Session};
    use evalix_testing::{ReducerTest, assertions, mocks::test_clock};

    fn test_env() -> EvaluationEnvironment {
        let client = HttpClient::new(
            HttpConfig::new("http://localhost:0"),
            Session::in_memory(),
            Vec::new(),
            None,
        )
        .unwrap_or_else(|e| unreachable!("client construction failed: {e}"));
        EvaluationEnvironment::new(
            Arc::new(EvaluationService::new(client)),
            Arc::new(test_clock()),
        )
    }

    fn evaluation(id: &str, score: &str) -> Evaluation {
        Evaluation {
            id: EvaluationId::new(id),
            comment: "Strong match".to_string(),
            score: score.to_string(),
            resume_id: ResumeId::new("r1"),
            vacancy_id: VacancyId::new("v1"),
            resume: None,
            vacancy: None,
        }
    }

    #[test]
    fn create_command_issues_request() {
        ReducerTest::new(EvaluationReducer::new())
            .with_env(test_env())
            .given_state(EvaluationState::default())
            .when_action(EvaluationAction::Create {
                evaluation: NewEvaluation {
                    resume_id: ResumeId::new("r1"),
                    vacancy_id: VacancyId::new("v1"),
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
    fn failed_create_keeps_list_unchanged() {
        let env = test_env();
        let reducer = EvaluationReducer::new();
        let mut state = EvaluationState {
            list: vec![evaluation("e1", "82")],
            loading: true,
            ..EvaluationState::default()
        };

        reducer.reduce(
            &mut state,
            EvaluationAction::CreateFailed {
                error: "Resume unreadable".to_string(),
            },
            &env,
        );

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Resume unreadable"));
        assert_eq!(state.list.len(), 1);
    }

    #[test]
    fn filtered_fetches_share_the_sequence_tag() {
        let env = test_env();
        let reducer = EvaluationReducer::new();
        let mut state = EvaluationState::default();

        // A by-vacancy fetch is superseded by a by-resume fetch.
        reducer.reduce(
            &mut state,
            EvaluationAction::FetchByVacancyId {
                vacancy_id: VacancyId::new("v1"),
            },
            &env,
        );
        reducer.reduce(
            &mut state,
            EvaluationAction::FetchByResumeId {
                resume_id: ResumeId::new("r1"),
            },
            &env,
        );

        reducer.reduce(
            &mut state,
            EvaluationAction::Fetched {
                seq: 2,
                evaluations: vec![evaluation("e2", "91")],
            },
            &env,
        );
        // The stale by-vacancy settle must not replace the fresher result.
        reducer.reduce(
            &mut state,
            EvaluationAction::Fetched {
                seq: 1,
                evaluations: vec![evaluation("e1", "82")],
            },
            &env,
        );

        assert_eq!(state.list, vec![evaluation("e2", "91")]);
    }

    #[test]
    fn delete_removes_by_id() {
        let env = test_env();
        let mut state = EvaluationState {
            list: vec![evaluation("e1", "82"), evaluation("e2", "91")],
            ..EvaluationState::default()
        };

        EvaluationReducer::new().reduce(
            &mut state,
            EvaluationAction::Deleted {
                id: EvaluationId::new("e1"),
            },
            &env,
        );

        assert_eq!(state.list, vec![evaluation("e2", "91")]);
    }
}
