//! REST service for resume endpoints.

use super::state::{Resume, ResumeId, ResumeUpload};
use crate::user::UserId;
use evalix_http::{FilePart, HttpClient, RequestOptions, Result};

/// REST service for the resume resource.
pub struct ResumeService {
    http: HttpClient,
}

impl ResumeService {
    /// Creates a service over the given transport client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch all resumes.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_all(&self) -> Result<Vec<Resume>> {
        self.http
            .get(
                "/resumes/v1/resume/get-all",
                RequestOptions::silent_success().with_error_message("Error fetching resumes"),
            )
            .await
    }

    /// Fetch the resumes belonging to one user.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_by_user_id(&self, user_id: &UserId) -> Result<Vec<Resume>> {
        self.http
            .get(
                &format!("/resumes/v1/resume/get-by-user-id/{user_id}"),
                RequestOptions::silent_success().with_error_message("Error fetching user resume"),
            )
            .await
    }

    /// Upload a resume file; the owning user travels as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn create(&self, upload: ResumeUpload, user_id: &UserId) -> Result<Resume> {
        self.http
            .upload(
                "/resumes/v1/resume/create",
                vec![FilePart::new(upload.file_name, upload.bytes)],
                &[],
                &[("userId", user_id.to_string())],
                RequestOptions::new()
                    .with_success_message("Resume uploaded successfully")
                    .with_error_message("Error uploading resume"),
            )
            .await
    }

    /// Delete a resume.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn delete(&self, id: &ResumeId) -> Result<()> {
        let _: serde_json::Value = self
            .http
            .delete(
                &format!("/resumes/v1/resume/delete/{id}"),
                RequestOptions::new()
                    .with_success_message("Resume deleted successfully")
                    .with_error_message("Error deleting resume"),
            )
            .await?;
        Ok(())
    }
}
