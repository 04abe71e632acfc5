//! Authentication endpoints.

use secrecy::SecretString;
use tracing::instrument;

use super::ApiClient;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::error::{ApiError, Result};

impl ApiClient {
    /// Log in with email and password.
    ///
    /// On success the returned token is attached to this client for
    /// subsequent requests; the caller decides whether to persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingToken`] when the backend reports success
    /// but the response carries no token under any known field.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response: AuthResponse = self
            .post(
                "/auth/login",
                &LoginRequest {
                    email: email.to_owned(),
                    password: password.to_owned(),
                },
            )
            .await?;

        let token = response.token.clone().ok_or(ApiError::MissingToken)?;
        self.set_token(SecretString::from(token));

        Ok(response)
    }

    /// Register a new account.
    ///
    /// Some backend versions log the new user straight in; when a token comes
    /// back it is attached like a login.
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let response: AuthResponse = self.post("/auth/register", request).await?;

        if let Some(token) = response.token.clone() {
            self.set_token(SecretString::from(token));
        }

        Ok(response)
    }

    /// The user owning the attached session token.
    #[instrument(skip(self))]
    pub async fn current_user(&self) -> Result<User> {
        self.get("/auth/me").await
    }

    /// Forget the session token. Purely local; the backend keeps no session
    /// state beyond the JWT itself.
    pub fn logout(&self) {
        self.clear_token();
    }
}
