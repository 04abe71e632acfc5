//! Cart store: mutation and query operations over the line items.

use rust_decimal::Decimal;
use tracing::warn;

use super::{CartLineItem, CartPersistence, CartProduct};
use crate::types::{ProductId, SellerId};

/// Owns the cart state and guarantees its invariants across all mutations.
///
/// Invariants:
/// - at most one line item per product; repeated adds merge quantities
/// - every quantity is at least 1
/// - all lines share one `seller_id`; a cross-seller add resets the cart
///
/// The store is deliberately infallible from the caller's point of view:
/// unknown product IDs make updates no-ops, and persistence failures are
/// logged rather than surfaced. This is purely local, recoverable UI state
/// with no irrecoverable failure modes.
#[derive(Debug)]
pub struct CartStore<P: CartPersistence> {
    lines: Vec<CartLineItem>,
    storage: P,
}

impl<P: CartPersistence> CartStore<P> {
    /// Create a store restored from the persistence backend.
    ///
    /// A backend that fails to load starts the cart empty.
    pub fn new(storage: P) -> Self {
        let lines = storage.load().unwrap_or_else(|e| {
            warn!("failed to restore cart, starting empty: {e}");
            Vec::new()
        });
        Self { lines, storage }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of a product to the cart.
    ///
    /// - A product from a different seller than the cart's current seller
    ///   replaces the entire cart with a single-line cart (single-seller
    ///   enforcement is a reset, not a rejection).
    /// - A product already in the cart has its quantity merged.
    /// - Otherwise the product is appended as a new line.
    ///
    /// Quantity 0 is coerced to 1.
    pub fn add_item(&mut self, product: &CartProduct, quantity: u32) {
        let line = product.clone().into_line(quantity);

        if self
            .seller_id()
            .is_some_and(|current| current != line.seller_id)
        {
            // Cross-seller add: discard the old cart for the new seller.
            self.lines = vec![line];
        } else if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            existing.quantity = existing.quantity.saturating_add(line.quantity);
        } else {
            self.lines.push(line);
        }

        self.persist();
    }

    /// Add a single unit of a product.
    pub fn add_item_one(&mut self, product: &CartProduct) {
        self.add_item(product, 1);
    }

    /// Set the quantity of an existing line.
    ///
    /// Values at or below zero are coerced to 1, not rejected; an unknown
    /// product ID is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        let clamped = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) else {
            return;
        };
        line.quantity = clamped;
        self.persist();
    }

    /// Remove the line for a product; no-op if it is not in the cart.
    pub fn remove_item(&mut self, product_id: ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the cart. Called after a successful order or by user action.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Sum of `unit_price * quantity` over all lines; exactly 0 when empty.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLineItem::subtotal).sum()
    }

    /// Seller of the cart's contents, if any.
    ///
    /// Callers use this to validate checkout eligibility before creating an
    /// order.
    #[must_use]
    pub fn seller_id(&self) -> Option<SellerId> {
        self.lines.first().map(|l| l.seller_id)
    }

    /// The line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Rewrite the persisted cart wholesale.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.lines) {
            warn!("failed to persist cart: {e}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::MemoryCartStorage;

    fn product(id: i64, price: i64, seller: i64) -> CartProduct {
        CartProduct {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Decimal::from(price),
            image_url: None,
            seller_id: SellerId::new(seller),
            seller_name: format!("Seller {seller}"),
        }
    }

    fn empty_cart() -> CartStore<MemoryCartStorage> {
        CartStore::new(MemoryCartStorage::default())
    }

    #[test]
    fn test_add_distinct_products_one_line_each() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 1);
        cart.add_item(&product(2, 5, 1), 3);
        cart.add_item(&product(3, 2, 1), 2);

        assert_eq!(cart.line_count(), 3);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_add_same_product_merges_quantity() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 1);
        cart.add_item(&product(1, 10, 1), 1);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Decimal::from(20));
    }

    #[test]
    fn test_cross_seller_add_resets_cart() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);
        cart.add_item(&product(2, 7, 1), 1);
        assert_eq!(cart.line_count(), 2);

        // Different seller discards everything, regardless of prior size.
        cart.add_item(&product(9, 5, 2), 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId::new(9));
        assert_eq!(cart.seller_id(), Some(SellerId::new(2)));
        assert_eq!(cart.total(), Decimal::from(5));
    }

    #[test]
    fn test_merged_line_then_cross_seller_reset() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Decimal::from(20));

        cart.add_item(&product(2, 5, 2), 1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId::new(2));
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.total(), Decimal::from(5));
    }

    #[test]
    fn test_add_quantity_zero_coerced_to_one() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 0);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 5);

        cart.update_quantity(ProductId::new(1), 0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(ProductId::new(1), -5);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(ProductId::new(1), 4);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_update_quantity_unknown_product_is_noop() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);
        cart.update_quantity(ProductId::new(99), 7);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);

        cart.remove_item(ProductId::new(99));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_last_item_empties_cart() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);
        cart.remove_item(ProductId::new(1));

        assert!(cart.is_empty());
        assert_eq!(cart.seller_id(), None);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);
        cart.add_item(&product(2, 5, 1), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_total_uses_snapshot_prices() {
        let mut cart = empty_cart();
        cart.add_item(&product(1, 10, 1), 2);

        // The same product re-added at a new price merges quantity but keeps
        // the original snapshot price.
        cart.add_item(&product(1, 99, 1), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total(), Decimal::from(30));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(empty_cart().total(), Decimal::ZERO);
    }

    #[test]
    fn test_mutations_rewrite_storage() {
        let storage = MemoryCartStorage::default();
        let mut cart = CartStore::new(storage);
        cart.add_item(&product(1, 10, 1), 2);
        cart.add_item(&product(2, 5, 1), 1);
        cart.update_quantity(ProductId::new(2), 4);

        let stored = cart.storage.stored();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[1].quantity, 4);
    }

    #[test]
    fn test_restores_from_storage() {
        let storage = MemoryCartStorage::default();
        {
            let mut cart = CartStore::new(storage);
            cart.add_item(&product(1, 10, 1), 2);
            cart.add_item(&product(2, 5, 1), 1);

            // Reload from the same backend; order and values survive.
            let reloaded = CartStore::new(MemoryCartStorage::seeded(cart.storage.stored()));
            assert_eq!(reloaded.lines(), cart.lines());
            assert_eq!(reloaded.total(), Decimal::from(25));
        }
    }
}
