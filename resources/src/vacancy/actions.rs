//! Vacancy container actions.

use super::state::{
    NewVacancy, NewVacancySkill, Vacancy, VacancyId, VacancySkill, VacancySkillId,
    VacancySkillPatch,
};

/// All possible inputs to the vacancy reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum VacancyAction {
    /// Fetch the full vacancy list.
    FetchAll,

    /// A list fetch settled successfully.
    Fetched {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// The backend's current vacancy list.
        vacancies: Vec<Vacancy>,
    },

    /// A list fetch settled with an error.
    FetchFailed {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// Failure message.
        error: String,
    },

    /// Fetch one vacancy by id for the detail view.
    FetchById {
        /// Id of the vacancy to fetch.
        id: VacancyId,
    },

    /// A by-id fetch settled successfully.
    FetchedById {
        /// The fetched vacancy.
        vacancy: Vacancy,
    },

    /// A by-id fetch settled with an error.
    FetchByIdFailed {
        /// Failure message.
        error: String,
    },

    /// Create a vacancy.
    Create {
        /// The vacancy to create.
        vacancy: NewVacancy,
    },

    /// A create settled successfully.
    Created {
        /// The record as issued by the backend.
        vacancy: Vacancy,
    },

    /// A create settled with an error.
    CreateFailed {
        /// Failure message.
        error: String,
    },

    /// Update a vacancy.
    Update {
        /// The full record to store.
        vacancy: Vacancy,
    },

    /// An update settled successfully.
    Updated {
        /// The updated record.
        vacancy: Vacancy,
    },

    /// An update settled with an error.
    UpdateFailed {
        /// Failure message.
        error: String,
    },

    /// Delete a vacancy.
    Delete {
        /// Id of the vacancy to delete.
        id: VacancyId,
    },

    /// A delete settled successfully; carries the id, not the record.
    Deleted {
        /// Id of the removed vacancy.
        id: VacancyId,
    },

    /// A delete settled with an error.
    DeleteFailed {
        /// Failure message.
        error: String,
    },

    /// Attach a skill requirement to a vacancy.
    AddSkill {
        /// The requirement to attach.
        skill: NewVacancySkill,
    },

    /// A skill attach settled successfully.
    ///
    /// Carries the owning vacancy id threaded through from the command,
    /// since the backend's requirement record does not repeat it.
    SkillAdded {
        /// The vacancy the requirement belongs to.
        vacancy_id: VacancyId,
        /// The requirement as issued by the backend.
        skill: VacancySkill,
    },

    /// A skill attach settled with an error.
    AddSkillFailed {
        /// Failure message.
        error: String,
    },

    /// Adjust an existing skill requirement.
    UpdateSkill {
        /// Fields to adjust.
        patch: VacancySkillPatch,
    },

    /// A skill adjust settled successfully.
    SkillUpdated {
        /// The updated requirement.
        skill: VacancySkill,
    },

    /// A skill adjust settled with an error.
    UpdateSkillFailed {
        /// Failure message.
        error: String,
    },

    /// Detach a skill requirement.
    RemoveSkill {
        /// Id of the requirement to detach.
        id: VacancySkillId,
    },

    /// A skill detach settled successfully; carries the id.
    SkillRemoved {
        /// Id of the removed requirement.
        id: VacancySkillId,
    },

    /// A skill detach settled with an error.
    RemoveSkillFailed {
        /// Failure message.
        error: String,
    },
}
