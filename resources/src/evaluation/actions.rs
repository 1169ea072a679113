//! Evaluation container actions.

use super::state::{Evaluation, EvaluationId, NewEvaluation};
use crate::resume::ResumeId;
use crate::vacancy::VacancyId;

/// All possible inputs to the evaluation reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationAction {
    /// Fetch the full evaluation list.
    FetchAll,

    /// Fetch the evaluations for one vacancy.
    FetchByVacancyId {
        /// The vacancy to filter by.
        vacancy_id: VacancyId,
    },

    /// Fetch the evaluations for one resume.
    FetchByResumeId {
        /// The resume to filter by.
        resume_id: ResumeId,
    },

    /// A list fetch settled successfully (all, or one filter's).
    Fetched {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// The fetched evaluations.
        evaluations: Vec<Evaluation>,
    },

    /// A list fetch settled with an error.
    FetchFailed {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// Failure message.
        error: String,
    },

    /// Request an evaluation of a resume against a vacancy.
    Create {
        /// The pair to evaluate.
        evaluation: NewEvaluation,
    },

    /// A create settled successfully.
    Created {
        /// The record as issued by the backend, score included.
        evaluation: Evaluation,
    },

    /// A create settled with an error.
    CreateFailed {
        /// Failure message.
        error: String,
    },

    /// Delete an evaluation.
    Delete {
        /// Id of the evaluation to delete.
        id: EvaluationId,
    },

    /// A delete settled successfully; carries the id, not the record.
    Deleted {
        /// Id of the removed evaluation.
        id: EvaluationId,
    },

    /// A delete settled with an error.
    DeleteFailed {
        /// Failure message.
        error: String,
    },
}
