//! Resume container actions.

use super::state::{Resume, ResumeId, ResumeUpload};
use crate::user::UserId;

/// All possible inputs to the resume reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeAction {
    /// Fetch the full resume list.
    FetchAll,

    /// Fetch the resumes belonging to one user.
    FetchByUserId {
        /// The owning user.
        user_id: UserId,
    },

    /// A list fetch settled successfully (all, or one user's).
    Fetched {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// The fetched resumes.
        resumes: Vec<Resume>,
    },

    /// A list fetch settled with an error.
    FetchFailed {
        /// Tag of the fetch this settle belongs to.
        seq: u64,
        /// Failure message.
        error: String,
    },

    /// Upload a resume file for a user.
    Upload {
        /// The file to upload.
        upload: ResumeUpload,
        /// The owning user.
        user_id: UserId,
    },

    /// An upload settled successfully.
    Uploaded {
        /// The record as issued by the backend.
        resume: Resume,
    },

    /// An upload settled with an error.
    UploadFailed {
        /// Failure message.
        error: String,
    },

    /// Delete a resume.
    Delete {
        /// Id of the resume to delete.
        id: ResumeId,
    },

    /// A delete settled successfully; carries the id, not the record.
    Deleted {
        /// Id of the removed resume.
        id: ResumeId,
    },

    /// A delete settled with an error.
    DeleteFailed {
        /// Failure message.
        error: String,
    },
}
