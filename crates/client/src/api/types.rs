//! Wire types for the storefront REST API.
//!
//! Field names are camelCase on the wire. Most response fields are optional
//! because the backend omits what it does not know; requests only serialize
//! the fields the corresponding endpoint reads.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use kommerce_core::cart::CartProduct;
use kommerce_core::types::{
    CategoryId, OrderId, OrderStatus, PaymentMethod, ProductId, Role, SellerId, ShippingStatus,
    UserId,
};

// =============================================================================
// Listings
// =============================================================================

/// A listing response in whichever shape the backend chose.
///
/// List endpoints sometimes return a Spring `Page` object (`{"content":
/// [...]}`), sometimes `{"items": [...]}`, sometimes a bare array. Everything
/// funnels through [`Listing::into_vec`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    /// Spring pageable: `{"content": [...], ...}`.
    Page {
        /// Items on this page.
        content: Vec<T>,
    },
    /// Envelope: `{"items": [...]}`.
    Envelope {
        /// The wrapped items.
        items: Vec<T>,
    },
    /// A bare JSON array.
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// The items regardless of envelope shape.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Page { content } => content,
            Self::Envelope { items } => items,
            Self::Plain(items) => items,
        }
    }
}

// =============================================================================
// Products & categories
// =============================================================================

/// A product as listed by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default, alias = "stockQuantity")]
    pub stock: Option<i64>,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_shop_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub sales: Option<i64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Product {
    /// The add-time snapshot handed to the cart.
    ///
    /// Returns `None` for a product with no seller attached; such a product
    /// cannot participate in the single-seller cart and the add becomes a
    /// no-op at the call site.
    #[must_use]
    pub fn cart_snapshot(&self) -> Option<CartProduct> {
        let seller_id = self.seller_id?;
        let seller_name = self
            .seller_shop_name
            .clone()
            .or_else(|| self.seller_name.clone())
            .unwrap_or_else(|| "Unknown seller".to_owned());

        Some(CartProduct {
            product_id: self.id,
            name: self.name.clone(),
            unit_price: self.price,
            image_url: self.image_url.clone(),
            seller_id,
            seller_name,
        })
    }
}

/// Fields for creating or updating a product (seller endpoints).
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A product category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// Auth & users
// =============================================================================

/// A user as returned by `/auth/me` and the admin endpoints.
///
/// The role field is deliberately left untyped here: the backend has shipped
/// it as a string, an authority array, and a nested object at various points.
/// [`User::role`] normalizes whatever arrived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "fullName")]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Undeclared fields, including whichever role shape the backend sent.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl User {
    /// Normalized role for this user.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::from_user(&Value::Object(self.extra.clone()))
    }
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// `"CUSTOMER"`, `"SELLER"`, or `"ADMIN"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body for `PUT /users/{id}` - profile updates.
///
/// Only the provided fields are serialized; the backend keeps the rest.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UpdateUserRequest {
    /// Whether no field was provided.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }
}

/// Response from login/register.
///
/// The token has been shipped under several names over time; aliases make all
/// of them land in `token`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default, alias = "accessToken", alias = "jwt")]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

// =============================================================================
// Orders
// =============================================================================

/// An order as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub seller_id: Option<SellerId>,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(default)]
    pub buyer_email: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Decimal>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub shipping_status: Option<ShippingStatus>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderLine>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// One line of a returned order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<Decimal>,
}

/// Reference to a product by ID, as nested in order payloads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRef {
    pub id: ProductId,
}

/// Body for `POST /orders` - the order-creation contract.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub shipping_address: String,
    pub payment_method: PaymentMethod,
    pub items: Vec<OrderItemRequest>,
    /// Card fields, present only for [`PaymentMethod::Card`]. Collected and
    /// forwarded as-is; the client never validates or processes them beyond
    /// checking presence.
    #[serde(flatten)]
    pub card: Option<CardDetails>,
}

/// One requested order line: `{"product": {"id": N}, "quantity": Q, "price": P}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderItemRequest {
    pub product: ProductRef,
    pub quantity: u32,
    pub price: Decimal,
}

/// Card detail fields for card payments.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub card_holder: String,
}

impl CardDetails {
    /// Whether every field was provided.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ![
            &self.card_number,
            &self.expiry_date,
            &self.cvv,
            &self.card_holder,
        ]
        .iter()
        .any(|f| f.trim().is_empty())
    }
}

/// Body for `PUT /orders/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Body for `PUT /orders/{id}/shipping`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShippingRequest {
    pub shipping_status: ShippingStatus,
}

// =============================================================================
// Admin
// =============================================================================

/// Aggregate counters from `GET /admin/stats`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminStats {
    pub total_users: u64,
    pub customer_count: u64,
    pub seller_count: u64,
    pub admin_count: u64,
    pub active_users: u64,
    pub total_products: u64,
    pub active_products: u64,
    pub inactive_products: u64,
    pub out_of_stock_products: u64,
    pub low_stock_products: u64,
    pub total_orders: u64,
    pub today_orders: u64,
    pub today_users: u64,
    pub total_revenue: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn product_json() -> Value {
        json!({
            "id": 1,
            "name": "Ceramic Mug",
            "price": 10.5,
            "stockQuantity": 12,
            "sellerId": 7,
            "sellerShopName": "Atelier North",
            "imageUrl": "https://img.example/1.jpg"
        })
    }

    #[test]
    fn test_listing_shapes_all_unwrap() {
        let page: Listing<Product> =
            serde_json::from_value(json!({ "content": [product_json()] })).unwrap();
        let envelope: Listing<Product> =
            serde_json::from_value(json!({ "items": [product_json()] })).unwrap();
        let plain: Listing<Product> = serde_json::from_value(json!([product_json()])).unwrap();

        for listing in [page, envelope, plain] {
            let items = listing.into_vec();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, ProductId::new(1));
        }
    }

    #[test]
    fn test_cart_snapshot_prefers_shop_name() {
        let product: Product = serde_json::from_value(product_json()).unwrap();
        let snapshot = product.cart_snapshot().unwrap();
        assert_eq!(snapshot.seller_name, "Atelier North");
        assert_eq!(snapshot.seller_id, SellerId::new(7));
        assert_eq!(snapshot.unit_price, Decimal::new(105, 1));
    }

    #[test]
    fn test_cart_snapshot_requires_seller() {
        let product: Product =
            serde_json::from_value(json!({ "id": 2, "name": "Orphan", "price": 1 })).unwrap();
        assert!(product.cart_snapshot().is_none());
    }

    #[test]
    fn test_user_role_shapes() {
        let user: User =
            serde_json::from_value(json!({ "email": "a@b.c", "role": "ROLE_SELLER" })).unwrap();
        assert_eq!(user.role(), Role::Seller);

        let user: User = serde_json::from_value(
            json!({ "email": "a@b.c", "authorities": [{ "authority": "ROLE_ADMIN" }] }),
        )
        .unwrap();
        assert_eq!(user.role(), Role::Admin);

        let user: User = serde_json::from_value(json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(user.role(), Role::Unknown);
    }

    #[test]
    fn test_auth_response_token_aliases() {
        for key in ["token", "accessToken", "jwt"] {
            let resp: AuthResponse =
                serde_json::from_value(json!({ key: "jwt-abc" })).unwrap();
            assert_eq!(resp.token.as_deref(), Some("jwt-abc"));
        }
    }

    #[test]
    fn test_update_user_request_skips_absent_fields() {
        let request = UpdateUserRequest {
            address: Some("12 Harbor St".to_owned()),
            ..UpdateUserRequest::default()
        };
        assert!(!request.is_empty());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "address": "12 Harbor St" })
        );

        assert!(UpdateUserRequest::default().is_empty());
        assert_eq!(
            serde_json::to_value(UpdateUserRequest::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_create_order_request_wire_shape() {
        let request = CreateOrderRequest {
            shipping_address: "12 Harbor St".to_owned(),
            payment_method: PaymentMethod::Cash,
            items: vec![OrderItemRequest {
                product: ProductRef {
                    id: ProductId::new(5),
                },
                quantity: 2,
                price: Decimal::new(105, 1),
            }],
            card: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "shippingAddress": "12 Harbor St",
                "paymentMethod": "CASH",
                "items": [{ "product": { "id": 5 }, "quantity": 2, "price": 10.5 }]
            })
        );
    }

    #[test]
    fn test_card_details_completeness() {
        let complete = CardDetails {
            card_number: "4111111111111111".to_owned(),
            expiry_date: "12/27".to_owned(),
            cvv: "123".to_owned(),
            card_holder: "K Demir".to_owned(),
        };
        assert!(complete.is_complete());

        let incomplete = CardDetails {
            cvv: String::new(),
            ..complete
        };
        assert!(!incomplete.is_complete());
    }

    #[test]
    fn test_admin_stats_defaults_missing_fields() {
        let stats: AdminStats =
            serde_json::from_value(json!({ "totalUsers": 3, "totalRevenue": 99.5 })).unwrap();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, Decimal::new(995, 1));
    }
}
