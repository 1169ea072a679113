//! Reducer for the vacancy container.

use super::actions::VacancyAction;
use super::service::VacancyService;
use super::state::{Vacancy, VacancySkill, VacancySkillId, VacancyState};
use evalix_core::effect::Effect;
use evalix_core::environment::Clock;
use evalix_core::reducer::Reducer;
use evalix_core::{SmallVec, smallvec};
use std::sync::Arc;

/// Environment dependencies for the vacancy container.
#[derive(Clone)]
pub struct VacancyEnvironment {
    /// REST service for vacancy endpoints.
    pub service: Arc<VacancyService>,
    /// Clock used to stamp list refreshes.
    pub clock: Arc<dyn Clock>,
}

impl VacancyEnvironment {
    /// Creates a new `VacancyEnvironment`.
    #[must_use]
    pub fn new(service: Arc<VacancyService>, clock: Arc<dyn Clock>) -> Self {
        Self { service, clock }
    }
}

/// Reducer for the vacancy container.
#[derive(Clone, Debug, Default)]
pub struct VacancyReducer;

impl VacancyReducer {
    /// Creates a new `VacancyReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn replace_skill(vacancy: &mut Vacancy, skill: &VacancySkill) {
        for existing in &mut vacancy.skills {
            if existing.id == skill.id {
                *existing = skill.clone();
            }
        }
    }

    fn remove_skill(vacancy: &mut Vacancy, id: &VacancySkillId) {
        vacancy.skills.retain(|s| s.id.as_ref() != Some(id));
    }
}

impl Reducer for VacancyReducer {
    type State = VacancyState;
    type Action = VacancyAction;
    type Environment = VacancyEnvironment;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Commands ==========
            VacancyAction::FetchAll => {
                state.loading = true;
                state.error = None;
                state.fetch_seq += 1;
                let seq = state.fetch_seq;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_all().await {
                        Ok(vacancies) => VacancyAction::Fetched { seq, vacancies },
                        Err(e) => VacancyAction::FetchFailed {
                            seq,
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::FetchById { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.get_by_id(&id).await {
                        Ok(vacancy) => VacancyAction::FetchedById { vacancy },
                        Err(e) => VacancyAction::FetchByIdFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::Create { vacancy } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.create(&vacancy).await {
                        Ok(vacancy) => VacancyAction::Created { vacancy },
                        Err(e) => VacancyAction::CreateFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::Update { vacancy } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.update(&vacancy).await {
                        Ok(vacancy) => VacancyAction::Updated { vacancy },
                        Err(e) => VacancyAction::UpdateFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::Delete { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete(&id).await {
                        Ok(()) => VacancyAction::Deleted { id },
                        Err(e) => VacancyAction::DeleteFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::AddSkill { skill } => {
                state.loading = true;
                state.error = None;
                let vacancy_id = skill.vacancy_id.clone();
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.add_skill(&skill).await {
                        Ok(skill) => VacancyAction::SkillAdded { vacancy_id, skill },
                        Err(e) => VacancyAction::AddSkillFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::UpdateSkill { patch } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.update_skill(&patch).await {
                        Ok(skill) => VacancyAction::SkillUpdated { skill },
                        Err(e) => VacancyAction::UpdateSkillFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            VacancyAction::RemoveSkill { id } => {
                state.loading = true;
                state.error = None;
                let service = Arc::clone(&env.service);
                smallvec![Effect::future(async move {
                    Some(match service.delete_skill(&id).await {
                        Ok(()) => VacancyAction::SkillRemoved { id },
                        Err(e) => VacancyAction::RemoveSkillFailed {
                            error: e.to_string(),
                        },
                    })
                })]
            },

            // ========== Events ==========
            VacancyAction::Fetched { seq, vacancies } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale vacancy fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = None;
                state.list = vacancies;
                state.fetched_at = Some(env.clock.now());
                SmallVec::new()
            },

            VacancyAction::FetchFailed { seq, error } => {
                if seq != state.fetch_seq {
                    tracing::debug!(seq, latest = state.fetch_seq, "stale vacancy fetch ignored");
                    return SmallVec::new();
                }
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },

            VacancyAction::FetchedById { vacancy } => {
                state.loading = false;
                state.error = None;
                if let Some(existing) = state.list.iter_mut().find(|v| v.id == vacancy.id) {
                    *existing = vacancy.clone();
                }
                state.current = Some(vacancy);
                SmallVec::new()
            },

            VacancyAction::Created { vacancy } => {
                state.loading = false;
                state.error = None;
                state.list.push(vacancy);
                SmallVec::new()
            },

            VacancyAction::Updated { vacancy } => {
                state.loading = false;
                state.error = None;
                if let Some(existing) = state.list.iter_mut().find(|v| v.id == vacancy.id) {
                    *existing = vacancy.clone();
                }
                if state.current.as_ref().is_some_and(|c| c.id == vacancy.id) {
                    state.current = Some(vacancy);
                }
                SmallVec::new()
            },

            VacancyAction::Deleted { id } => {
                state.loading = false;
                state.error = None;
                state.list.retain(|v| v.id != id);
                if state.current.as_ref().is_some_and(|c| c.id == id) {
                    state.current = None;
                }
                SmallVec::new()
            },

            VacancyAction::SkillAdded { vacancy_id, skill } => {
                state.loading = false;
                state.error = None;
                if let Some(vacancy) = state.list.iter_mut().find(|v| v.id == vacancy_id) {
                    vacancy.skills.push(skill.clone());
                }
                if let Some(current) = state.current.as_mut() {
                    if current.id == vacancy_id {
                        current.skills.push(skill);
                    }
                }
                SmallVec::new()
            },

            VacancyAction::SkillUpdated { skill } => {
                state.loading = false;
                state.error = None;
                for vacancy in &mut state.list {
                    Self::replace_skill(vacancy, &skill);
                }
                if let Some(current) = state.current.as_mut() {
                    Self::replace_skill(current, &skill);
                }
                SmallVec::new()
            },

            VacancyAction::SkillRemoved { id } => {
                state.loading = false;
                state.error = None;
                for vacancy in &mut state.list {
                    Self::remove_skill(vacancy, &id);
                }
                if let Some(current) = state.current.as_mut() {
                    Self::remove_skill(current, &id);
                }
                SmallVec::new()
            },

            VacancyAction::FetchByIdFailed { error }
            | VacancyAction::CreateFailed { error }
            | VacancyAction::UpdateFailed { error }
            | VacancyAction::DeleteFailed { error }
            | VacancyAction::AddSkillFailed { error }
            | VacancyAction::UpdateSkillFailed { error }
            | VacancyAction::RemoveSkillFailed { error } => {
                state.loading = false;
                state.error = Some(error);
                SmallVec::new()
            },
        }
    }
}
