//! The shopping cart state manager.
//!
//! # Architecture
//!
//! [`CartStore`] is the single source of truth for the cart. It holds an
//! ordered list of line items keyed by product ID and enforces the
//! single-seller rule: a cart only ever contains products from one seller,
//! and adding a product from a different seller resets the cart to just that
//! product.
//!
//! Persistence goes through the injected [`CartPersistence`] port. The store
//! restores its state from the port once at construction and rewrites the
//! whole serialized cart after every mutation. Persistence failures are
//! logged and otherwise ignored; the in-memory state stays authoritative and
//! the cart is always recoverable by the user re-adding items.
//!
//! # Example
//!
//! ```
//! use kommerce_core::cart::{CartProduct, CartStore, MemoryCartStorage};
//! use kommerce_core::types::{ProductId, SellerId};
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartStore::new(MemoryCartStorage::default());
//! cart.add_item(
//!     &CartProduct {
//!         product_id: ProductId::new(1),
//!         name: "Ceramic Mug".to_owned(),
//!         unit_price: Decimal::new(1050, 2),
//!         image_url: None,
//!         seller_id: SellerId::new(7),
//!         seller_name: "Atelier North".to_owned(),
//!     },
//!     2,
//! );
//! assert_eq!(cart.total(), Decimal::new(2100, 2));
//! ```

mod persist;
mod store;

pub use persist::{CartPersistence, MemoryCartStorage, PersistError};
pub use store::CartStore;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, SellerId};

/// One product entry in the cart.
///
/// Name, price, and seller name are snapshotted at add-time and never
/// re-fetched; a price change on the product page does not ripple into carts
/// that already hold the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product this line refers to. At most one line per product.
    pub product_id: ProductId,
    /// Display name, snapshotted at add-time.
    pub name: String,
    /// Unit price, snapshotted at add-time.
    pub unit_price: Decimal,
    /// Optional display image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Positive quantity, minimum 1.
    pub quantity: u32,
    /// Seller of the product. All lines in a cart share one seller.
    pub seller_id: SellerId,
    /// Seller display name, snapshotted at add-time.
    pub seller_name: String,
}

impl CartLineItem {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Add-time snapshot of a product, the input to [`CartStore::add_item`].
///
/// The API client's product DTO converts into this so the cart engine has no
/// dependency on wire types.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub seller_id: SellerId,
    pub seller_name: String,
}

impl CartProduct {
    /// Turn the snapshot into a line item with the given quantity.
    ///
    /// Quantity 0 is coerced to 1; a line item always represents at least one
    /// unit.
    fn into_line(self, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id: self.product_id,
            name: self.name,
            unit_price: self.unit_price,
            image_url: self.image_url,
            quantity: quantity.max(1),
            seller_id: self.seller_id,
            seller_name: self.seller_name,
        }
    }
}
