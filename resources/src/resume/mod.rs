//! Resume resource
//!
//! Resumes are uploaded as files; the backend extracts and stores them,
//! returning a record that points at the stored copy.

mod actions;
mod reducer;
mod service;
mod state;

pub use actions::ResumeAction;
pub use reducer::{ResumeEnvironment, ResumeReducer};
pub use service::ResumeService;
pub use state::{Resume, ResumeId, ResumeState, ResumeUpload};
