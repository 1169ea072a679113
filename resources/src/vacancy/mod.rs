//! Vacancy resource
//!
//! Vacancies carry an embedded collection of skill requirements, managed
//! through a sub-resource endpoint of their own.

mod actions;
mod reducer;
mod service;
mod state;

pub use actions::VacancyAction;
pub use reducer::{VacancyEnvironment, VacancyReducer};
pub use service::VacancyService;
pub use state::{
    NewVacancy, NewVacancySkill, Vacancy, VacancyId, VacancySkill, VacancySkillId,
    VacancySkillPatch, VacancyState, level_label,
};
