//! REST service for evaluation endpoints.

use super::state::{Evaluation, EvaluationId, NewEvaluation};
use crate::resume::ResumeId;
use crate::vacancy::VacancyId;
use evalix_http::{HttpClient, RequestOptions, Result};

/// REST service for the evaluation resource.
pub struct EvaluationService {
    http: HttpClient,
}

impl EvaluationService {
    /// Creates a service over the given transport client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch all evaluations.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_all(&self) -> Result<Vec<Evaluation>> {
        self.http
            .get(
                "/evaluations/v1/evaluation/get-all",
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Fetch the evaluations for one vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_by_vacancy_id(&self, vacancy_id: &VacancyId) -> Result<Vec<Evaluation>> {
        self.http
            .get(
                &format!("/evaluations/v1/evaluation/get-by-vacancy-id/{vacancy_id}"),
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Fetch the evaluations for one resume.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_by_resume_id(&self, resume_id: &ResumeId) -> Result<Vec<Evaluation>> {
        self.http
            .get(
                &format!("/evaluations/v1/evaluation/get-by-resume-id/{resume_id}"),
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Request an evaluation; the backend runs the analysis synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn create(&self, evaluation: &NewEvaluation) -> Result<Evaluation> {
        self.http
            .post(
                "/evaluations/v1/evaluation/create",
                evaluation,
                RequestOptions::new()
                    .with_success_message("Evaluation created successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Delete an evaluation.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn delete(&self, id: &EvaluationId) -> Result<()> {
        let _: serde_json::Value = self
            .http
            .delete(
                &format!("/evaluations/v1/evaluation/delete/{id}"),
                RequestOptions::new()
                    .with_success_message("Evaluation deleted successfully")
                    .with_error_message("Error"),
            )
            .await?;
        Ok(())
    }
}
