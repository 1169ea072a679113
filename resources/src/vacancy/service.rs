//! REST service for vacancy and vacancy-skill endpoints.

use super::state::{
    NewVacancy, NewVacancySkill, Vacancy, VacancyId, VacancySkill, VacancySkillId,
    VacancySkillPatch,
};
use evalix_http::{HttpClient, RequestOptions, Result};

/// REST service for the vacancy resource and its skill sub-resource.
pub struct VacancyService {
    http: HttpClient,
}

impl VacancyService {
    /// Creates a service over the given transport client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch all vacancies.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_all(&self) -> Result<Vec<Vacancy>> {
        self.http
            .get(
                "/vacancies/v1/vacancy/get-all",
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Fetch one vacancy by id.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_by_id(&self, id: &VacancyId) -> Result<Vacancy> {
        self.http
            .get(
                &format!("/vacancies/v1/vacancy/get-by-id/{id}"),
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Create a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn create(&self, vacancy: &NewVacancy) -> Result<Vacancy> {
        self.http
            .post(
                "/vacancies/v1/vacancy/create",
                vacancy,
                RequestOptions::new()
                    .with_success_message("Vacancy created successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Update a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn update(&self, vacancy: &Vacancy) -> Result<Vacancy> {
        self.http
            .put(
                &format!("/vacancies/v1/vacancy/update/{}", vacancy.id),
                vacancy,
                RequestOptions::new()
                    .with_success_message("Vacancy updated successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Delete a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn delete(&self, id: &VacancyId) -> Result<()> {
        let _: serde_json::Value = self
            .http
            .delete(
                &format!("/vacancies/v1/vacancy/delete/{id}"),
                RequestOptions::new()
                    .with_success_message("Vacancy deleted successfully")
                    .with_error_message("Error"),
            )
            .await?;
        Ok(())
    }

    /// Attach a skill requirement to a vacancy.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn add_skill(&self, skill: &NewVacancySkill) -> Result<VacancySkill> {
        self.http
            .post(
                "/vacancySkills/v1/vacancy-skill/create",
                skill,
                RequestOptions::new()
                    .with_success_message("Vacancy skill added successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Adjust an existing skill requirement.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn update_skill(&self, patch: &VacancySkillPatch) -> Result<VacancySkill> {
        self.http
            .put(
                &format!("/vacancySkills/v1/vacancy-skill/update/{}", patch.id),
                patch,
                RequestOptions::new()
                    .with_success_message("Vacancy skill updated successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Detach a skill requirement.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn delete_skill(&self, id: &VacancySkillId) -> Result<()> {
        let _: serde_json::Value = self
            .http
            .delete(
                &format!("/vacancySkills/v1/vacancy-skill/delete/{id}"),
                RequestOptions::new()
                    .with_success_message("Vacancy skill deleted successfully")
                    .with_error_message("Error"),
            )
            .await?;
        Ok(())
    }
}
