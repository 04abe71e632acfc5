//! User profile endpoints.

use tracing::instrument;

use kommerce_core::types::UserId;

use super::types::{UpdateUserRequest, User};
use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// One user by ID.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        self.get(&format!("/users/{id}")).await
    }

    /// Update a user's profile fields.
    ///
    /// Absent fields in the request are left untouched by the backend.
    #[instrument(skip(self, request))]
    pub async fn update_user(&self, id: UserId, request: &UpdateUserRequest) -> Result<User> {
        self.put(&format!("/users/{id}"), request).await
    }
}
