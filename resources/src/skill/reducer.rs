//! Reducer for the skill container.

use super::actions::SkillAction;
use super::service::SkillService;
use super::state::SkillState;
use evalix_core::effect::Effect;
use evalix_core::environment::Clock;
use evalix_core::reducer::Reducer;
use evalix_core::{SmallVec, smallvec};
use std::sync::Arc;

/// Environment dependencies for the skill container.
#[derive(Clone)]
pub struct SkillEnvironment {
    /// REST service for skill endpoints.
    pub service: Arc<SkillService>,
    /// Clock used to stamp list refreshes.
    pub clock: Arc<dyn Clock>,
}

impl SkillEnvironment {
    /// Creates a new `SkillEnvironment`.
    #[must_use]
    pub fn new(service: Arc<SkillService>, clock: Arc<dyn Clock>) -> Self {
        Self { service, clock }
    }
}

/// Reducer for the skill container.
#[derive(Clone, Debug, Default)]
pub struct SkillReducer;

impl SkillReducer {
    /// Creates a new `SkillReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for SkillReducer {
    type State = SkillState;
    type Action = SkillAction;
    type Environment = SkillEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            SkillAction::FetchAll => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_all().await {
                        Ok(skills) => SkillAction::Fetched { seq, skills },
                        Err(e) => SkillAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            SkillAction::Create { skill } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.create(&skill).await {
                        Ok(skill) => SkillAction::Created { skill },
                        Err(e) => SkillAction::CreateFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            SkillAction::Update { skill } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.update(&skill).await {
                        Ok(skill) => SkillAction::Updated { skill },
                        Err(e) => SkillAction::UpdateFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            SkillAction::Delete { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete(&id).await {
                        Ok(()) => SkillAction::Deleted { id },
                        Err(e) => SkillAction::DeleteFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            // ========== Events ==========
            SkillAction::Fetched { seq, skills } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale skill fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = None;
                state.list = skills;
                state.fetched_at = Some(env.clock.now());
                SmallVec::new()
            },

            SkillAction::FetchFailed { seq, error } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale skill fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },

            SkillAction::Created { skill } => {
                state.loading = false;
                state.error = None;
                state.list.push(skill);
                SmallVec::new()
            },

            SkillAction::Updated { skill } => {
                state.loading = false;
                state.error = None;
                if let Some(existing) = state.list.iter_mut().find(|s| s.id == skill.id) {
                    *existing = skill;
                }
                SmallVec::new()
            },

            SkillAction::Deleted { id } => {
                state.loading = false;
                state.error = None;
                state.list.retain(|s| s.id != id);
                SmallVec::new()
            },

            SkillAction::CreateFailed { error }
            | SkillAction::UpdateFailed { error }
            | SkillAction::DeleteFailed { error } => {
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },
        }
    }
}
