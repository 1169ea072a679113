//! Skill container actions.
//!
//! Commands express user intent and produce effects; events carry settled
//! request results back into the reducer.

use super::state::{NewSkill, Skill, SkillId};

/// All possible inputs to the skill reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum SkillAction {
    /// Fetch the full skill list.
    FetchAll,

    /// A list fetch settled successfully.
    Fetched {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// The backend's current skill list.
        skills: Vec<Skill>,
    },

    /// A list fetch settled with an error.
    FetchFailed {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// Failure message.
        error: String,
    },

    /// Create a skill.
    Create {
        /// The skill to create.
        skill: NewSkill,
    },

    /// A create settled successfully.
    Created {
        /// The record as issued by the backend.
        skill: Skill,
    },

    /// A create settled with an error.
    CreateFailed {
        /// Failure message.
        error: String,
    },

    /// Update a skill.
    Update {
        /// The full record to store.
        skill: Skill,
    },

    /// An update settled successfully.
    Updated {
        /// The updated record.
        skill: Skill,
    },

    /// An update settled with an error.
    UpdateFailed {
        /// Failure message.
        error: String,
    },

    /// Delete a skill.
    Delete {
        /// Id of the skill to delete.
        id: SkillId,
    },

    /// A delete settled successfully.
    ///
    /// Carries the id rather than the record: the backend delete response
    /// is not guaranteed useful.
    Deleted {
        /// Id of the removed skill.
        id: SkillId,
    },

    /// A delete settled with an error.
    DeleteFailed {
        /// Failure message.
        error: String,
    },
}
