//! Admin dashboard endpoints.
//!
//! Role gating is the server's job; these calls simply fail with
//! `ApiError::Unauthorized` or a 403 `ApiError::Api` for non-admin tokens.

use tracing::instrument;

use kommerce_core::types::{ProductId, UserId};

use super::types::{AdminStats, Listing, Order, Product, ProductInput, User};
use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Aggregate store statistics.
    #[instrument(skip(self))]
    pub async fn get_admin_stats(&self) -> Result<AdminStats> {
        self.get("/admin/stats").await
    }

    /// Every registered user.
    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let listing: Listing<User> = self.get("/admin/users").await?;
        Ok(listing.into_vec())
    }

    /// Every product, regardless of status.
    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Result<Vec<Product>> {
        let listing: Listing<Product> = self.get("/admin/products").await?;
        Ok(listing.into_vec())
    }

    /// Every order across the store.
    #[instrument(skip(self))]
    pub async fn get_all_orders(&self) -> Result<Vec<Order>> {
        let listing: Listing<Order> = self.get("/admin/orders").await?;
        Ok(listing.into_vec())
    }

    /// Remove a user account.
    #[instrument(skip(self))]
    pub async fn admin_delete_user(&self, id: UserId) -> Result<()> {
        let _: serde_json::Value = self.delete(&format!("/admin/users/{id}")).await?;
        Ok(())
    }

    /// Remove a product listing.
    #[instrument(skip(self))]
    pub async fn admin_delete_product(&self, id: ProductId) -> Result<()> {
        let _: serde_json::Value = self.delete(&format!("/admin/products/{id}")).await?;
        self.invalidate_cache();
        Ok(())
    }

    /// Edit any product listing.
    #[instrument(skip(self, input))]
    pub async fn admin_update_product(&self, id: ProductId, input: &ProductInput) -> Result<Product> {
        let product = self.put(&format!("/admin/products/{id}"), input).await?;
        self.invalidate_cache();
        Ok(product)
    }
}
