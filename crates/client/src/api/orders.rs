//! Order endpoints.

use tracing::instrument;

use kommerce_core::types::{OrderId, OrderStatus, ShippingStatus};

use super::types::{CreateOrderRequest, Listing, Order, UpdateShippingRequest, UpdateStatusRequest};
use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Create an order from a checkout request.
    ///
    /// Callers build the request via [`crate::checkout::build_order`] so the
    /// cart invariants have already been validated, and clear the cart once
    /// this returns success.
    #[instrument(skip(self, request))]
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<Order> {
        self.post("/orders", request).await
    }

    /// Orders placed by the authenticated user.
    #[instrument(skip(self))]
    pub async fn get_my_orders(&self) -> Result<Vec<Order>> {
        let listing: Listing<Order> = self.get("/orders").await?;
        Ok(listing.into_vec())
    }

    /// One order by ID.
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order> {
        self.get(&format!("/orders/{id}")).await
    }

    /// Orders containing the authenticated seller's products.
    #[instrument(skip(self))]
    pub async fn get_seller_orders(&self) -> Result<Vec<Order>> {
        let listing: Listing<Order> = self.get("/orders/seller").await?;
        Ok(listing.into_vec())
    }

    /// Update an order's lifecycle status.
    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        self.put(&format!("/orders/{id}/status"), &UpdateStatusRequest { status })
            .await
    }

    /// Update an order's shipping progress.
    #[instrument(skip(self))]
    pub async fn update_shipping_status(
        &self,
        id: OrderId,
        shipping_status: ShippingStatus,
    ) -> Result<Order> {
        self.put(
            &format!("/orders/{id}/shipping"),
            &UpdateShippingRequest { shipping_status },
        )
        .await
    }

    /// Seller approval of a pending order.
    #[instrument(skip(self))]
    pub async fn approve_order(&self, id: OrderId) -> Result<Order> {
        self.put_empty(&format!("/orders/{id}/approve")).await
    }
}
