//! Table rendering for listings.

use rust_decimal::Decimal;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use kommerce_client::api::types::{Order, Product, User};
use kommerce_core::cart::CartLineItem;
use kommerce_core::types::{CurrencyCode, Price};

/// Store display currency.
const CURRENCY: CurrencyCode = CurrencyCode::TRY;

/// Format a monetary amount for display.
pub fn money(amount: Decimal) -> String {
    Price::new(amount).display(CURRENCY)
}

/// Render any set of rows as a table.
pub fn table<T: Tabled>(rows: impl IntoIterator<Item = T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

#[derive(Tabled)]
pub struct ProductRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Price")]
    pub price: String,
    #[tabled(rename = "Stock")]
    pub stock: String,
    #[tabled(rename = "Seller")]
    pub seller: String,
    #[tabled(rename = "Category")]
    pub category: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            price: money(p.price),
            stock: p.stock.map_or_else(|| "-".to_owned(), |s| s.to_string()),
            seller: p
                .seller_shop_name
                .clone()
                .or_else(|| p.seller_name.clone())
                .unwrap_or_else(|| "-".to_owned()),
            category: p.category_name.clone().unwrap_or_else(|| "-".to_owned()),
        }
    }
}

#[derive(Tabled)]
pub struct CartRow {
    #[tabled(rename = "Product")]
    pub product: String,
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Unit price")]
    pub unit_price: String,
    #[tabled(rename = "Qty")]
    pub quantity: u32,
    #[tabled(rename = "Subtotal")]
    pub subtotal: String,
}

impl From<&CartLineItem> for CartRow {
    fn from(line: &CartLineItem) -> Self {
        Self {
            product: line.name.clone(),
            id: line.product_id.to_string(),
            unit_price: money(line.unit_price),
            quantity: line.quantity,
            subtotal: money(line.subtotal()),
        }
    }
}

#[derive(Tabled)]
pub struct OrderRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Shipping")]
    pub shipping: String,
    #[tabled(rename = "Total")]
    pub total: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order
                .status
                .map_or_else(|| "-".to_owned(), |s| s.to_string()),
            shipping: order
                .shipping_status
                .map_or_else(|| "-".to_owned(), |s| s.to_string()),
            total: order.total_amount.map_or_else(|| "-".to_owned(), money),
            created: order
                .created_at
                .map_or_else(|| "-".to_owned(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Email")]
    pub email: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Role")]
    pub role: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.map_or_else(|| "-".to_owned(), |id| id.to_string()),
            email: user.email.clone().unwrap_or_else(|| "-".to_owned()),
            name: user.name.clone().unwrap_or_else(|| "-".to_owned()),
            role: user.role().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(Decimal::new(1050, 2)), "₺10.50");
        assert_eq!(money(Decimal::ZERO), "₺0.00");
    }
}
