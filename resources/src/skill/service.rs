//! REST service for skill endpoints.
//!
//! Pure request shaping: every method maps 1:1 to a backend endpoint with
//! the notification configuration for that operation.

use super::state::{NewSkill, Skill, SkillId};
use evalix_http::{HttpClient, RequestOptions, Result};

/// REST service for the skill resource.
pub struct SkillService {
    http: HttpClient,
}

impl SkillService {
    /// Creates a service over the given transport client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch all skills.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_all(&self) -> Result<Vec<Skill>> {
        self.http
            .get(
                "/skills/v1/skill/get-all",
                RequestOptions::silent_success().with_error_message("Error"),
            )
            .await
    }

    /// Create a skill.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn create(&self, skill: &NewSkill) -> Result<Skill> {
        self.http
            .post(
                "/skills/v1/skill/create",
                skill,
                RequestOptions::new()
                    .with_success_message("Skill created successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Update a skill.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn update(&self, skill: &Skill) -> Result<Skill> {
        self.http
            .put(
                &format!("/skills/v1/skill/update/{}", skill.id),
                skill,
                RequestOptions::new()
                    .with_success_message("Skill updated successfully")
                    .with_error_message("Error"),
            )
            .await
    }

    /// Delete a skill.
    ///
    /// The backend response body is not relied upon.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn delete(&self, id: &SkillId) -> Result<()> {
        let _: serde_json::Value = self
            .http
            .delete(
                &format!("/skills/v1/skill/delete/{id}"),
                RequestOptions::new()
                    .with_success_message("Skill deleted successfully")
                    .with_error_message("Error"),
            )
            .await?;
        Ok(())
    }
}
