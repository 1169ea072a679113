//! REST service for user endpoints.

use super::state::{AuthenticatedUser, GoogleCredential, User, UserId};
use evalix_http::{HttpClient, RequestOptions, Result};

/// REST service for the user resource.
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    /// Creates a service over the given transport client.
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch all users.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.http
            .get("/users/v1/user/get-all", RequestOptions::new())
            .await
    }

    /// Fetch one user by id.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn get_by_id(&self, id: &UserId) -> Result<User> {
        self.http
            .get(
                &format!("/users/v1/user/{id}"),
                RequestOptions::silent_success()
                    .with_error_message("Failed to fetch user data"),
            )
            .await
    }

    /// Exchange an identity-provider credential for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`evalix_http::HttpError`] on transport or backend failure.
    pub async fn google_auth(&self, credential: &GoogleCredential) -> Result<AuthenticatedUser> {
        self.http
            .post(
                "/users/v1/user/google-auth/login-with-google",
                credential,
                RequestOptions::new(),
            )
            .await
    }
}
