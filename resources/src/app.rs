//! Root state aggregator
//!
//! Composes the five resource containers into one addressable state tree.
//! No cross-entity joins happen here: related records arrive pre-populated
//! from the backend.

use crate::config::{
    EVALUATION_TIMEOUT, EvalixConfig, RESUME_TIMEOUT, SKILL_TIMEOUT, USER_TIMEOUT, VACANCY_TIMEOUT,
};
use crate::evaluation::{
    EvaluationAction, EvaluationEnvironment, EvaluationReducer, EvaluationService, EvaluationState,
};
use crate::resume::{ResumeAction, ResumeEnvironment, ResumeReducer, ResumeService, ResumeState};
use crate::skill::{SkillAction, SkillEnvironment, SkillReducer, SkillService, SkillState};
use crate::user::{UserAction, UserEnvironment, UserReducer, UserService, UserState};
use crate::vacancy::{
    VacancyAction, VacancyEnvironment, VacancyReducer, VacancyService, VacancyState,
};
use evalix_core::SmallVec;
use evalix_core::effect::Effect;
use evalix_core::environment::{Clock, SystemClock};
use evalix_core::reducer::Reducer;
use evalix_http::{HttpClient, HttpClientOptions, Result, Session, create_http_client};
use std::sync::Arc;
use std::time::Duration;

/// The full client-side state tree, keyed by entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// User container.
    pub users: UserState,
    /// Skill container.
    pub skills: SkillState,
    /// Vacancy container.
    pub vacancies: VacancyState,
    /// Resume container.
    pub resumes: ResumeState,
    /// Evaluation container.
    pub evaluations: EvaluationState,
}

/// Any action of any resource container.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// A user container action.
    User(UserAction),
    /// A skill container action.
    Skill(SkillAction),
    /// A vacancy container action.
    Vacancy(VacancyAction),
    /// A resume container action.
    Resume(ResumeAction),
    /// An evaluation container action.
    Evaluation(EvaluationAction),
}

/// Environments of every container plus the shared session.
#[derive(Clone)]
pub struct AppEnvironment {
    /// The session every transport client shares.
    pub session: Session,
    /// User container environment.
    pub users: UserEnvironment,
    /// Skill container environment.
    pub skills: SkillEnvironment,
    /// Vacancy container environment.
    pub vacancies: VacancyEnvironment,
    /// Resume container environment.
    pub resumes: ResumeEnvironment,
    /// Evaluation container environment.
    pub evaluations: EvaluationEnvironment,
}

impl AppEnvironment {
    /// Build every service and environment from one configuration.
    ///
    /// One [`Session`] is created from the configured token storage and
    /// cloned into five transport clients, each with the timeout its
    /// operations need and a notification middleware over the configured
    /// notifier.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError::Transport`] if a client cannot be
    /// built.
    pub fn from_config(config: EvalixConfig) -> Result<Self> {
        let session = Session::new(Arc::clone(&config.token_storage));
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let client = |timeout: Duration| -> Result<HttpClient> {
            let mut options = HttpClientOptions::new(&config.base_url)
                .with_timeout(timeout)
                .with_default_messages("Success", "Error");
            if let Some(cancel) = &config.cancel {
                options = options.with_cancel(cancel.clone());
            }
            create_http_client(options, session.clone(), Arc::clone(&config.notifier))
        };

        Ok(Self {
            users: UserEnvironment::new(
                Arc::new(UserService::new(client(USER_TIMEOUT)?)),
                Arc::clone(&clock),
                session.clone(),
            ),
            skills: SkillEnvironment::new(
                Arc::new(SkillService::new(client(SKILL_TIMEOUT)?)),
                Arc::clone(&clock),
            ),
            vacancies: VacancyEnvironment::new(
                Arc::new(VacancyService::new(client(VACANCY_TIMEOUT)?)),
                Arc::clone(&clock),
            ),
            resumes: ResumeEnvironment::new(
                Arc::new(ResumeService::new(client(RESUME_TIMEOUT)?)),
                Arc::clone(&clock),
            ),
            evaluations: EvaluationEnvironment::new(
                Arc::new(EvaluationService::new(client(EVALUATION_TIMEOUT)?)),
                clock,
            ),
            session,
        })
    }
}

/// Reducer that delegates every action to its container's reducer.
#[derive(Clone, Debug, Default)]
pub struct AppReducer {
    users: UserReducer,
    skills: SkillReducer,
    vacancies: VacancyReducer,
    resumes: ResumeReducer,
    evaluations: EvaluationReducer,
}

impl AppReducer {
    /// Creates a new `AppReducer`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: UserReducer::new(),
            skills: SkillReducer::new(),
            vacancies: VacancyReducer::new(),
            resumes: ResumeReducer::new(),
            evaluations: EvaluationReducer::new(),
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::User(action) => self
                .users
                .reduce(&mut state.users, action, &env.users)
                .into_iter()
                .map(|e| e.map(AppAction::User))
                .collect(),
            AppAction::Skill(action) => self
                .skills
                .reduce(&mut state.skills, action, &env.skills)
                .into_iter()
                .map(|e| e.map(AppAction::Skill))
                .collect(),
            AppAction::Vacancy(action) => self
                .vacancies
                .reduce(&mut state.vacancies, action, &env.vacancies)
                .into_iter()
                .map(|e| e.map(AppAction::Vacancy))
                .collect(),
            AppAction::Resume(action) => self
                .resumes
                .reduce(&mut state.resumes, action, &env.resumes)
                .into_iter()
                .map(|e| e.map(AppAction::Resume))
                .collect(),
            AppAction::Evaluation(action) => self
                .evaluations
                .reduce(&mut state.evaluations, action, &env.evaluations)
                .into_iter()
                .map(|e| e.map(AppAction::Evaluation))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill::{Skill, SkillId};

    #[test]
    fn environment_builds_from_config() {
        let env = AppEnvironment::from_config(EvalixConfig::new("http://localhost:5296"));
        let Ok(env) = env else {
            unreachable!("environment builds from a valid config");
        };
        assert!(!env.session.is_authenticated());
    }

    #[test]
    fn actions_touch_only_their_container() {
        let env = AppEnvironment::from_config(EvalixConfig::new("http://localhost:5296"));
        let Ok(env) = env else {
            unreachable!("environment builds from a valid config");
        };
        let mut state = AppState::default();

        AppReducer::new().reduce(
            &mut state,
            AppAction::Skill(SkillAction::Created {
                skill: Skill {
                    id: SkillId::new("9"),
                    title: "Go".to_string(),
                },
            }),
            &env,
        );

        assert_eq!(state.skills.list.len(), 1);
        assert!(state.vacancies.list.is_empty());
        assert!(state.users.list.is_empty());
        assert!(state.resumes.list.is_empty());
        assert!(state.evaluations.list.is_empty());
    }
}
