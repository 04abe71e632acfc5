//! Checkout: cart line items into the order-creation contract.
//!
//! The cart engine guarantees a single seller per cart, but the persisted
//! slot is a plain file a user can edit, so the guards here re-check the
//! invariants the backend cares about before any request goes out.

use thiserror::Error;

use kommerce_core::cart::CartLineItem;
use kommerce_core::types::PaymentMethod;

use crate::api::types::{CardDetails, CreateOrderRequest, OrderItemRequest, ProductRef};

/// Why a checkout attempt was rejected before reaching the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("the cart is empty")]
    EmptyCart,

    /// The cart somehow contains products from more than one seller.
    #[error("the cart contains products from more than one seller")]
    MixedSellers,

    /// No shipping address was provided.
    #[error("a shipping address is required")]
    MissingShippingAddress,

    /// Card payment selected but card details are absent or incomplete.
    #[error("card payment requires card number, expiry, CVV, and holder name")]
    IncompleteCardDetails,
}

/// What the user filled in on the checkout form.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    /// Free-text delivery address.
    pub shipping_address: String,
    /// `CARD` or `CASH`.
    pub payment_method: PaymentMethod,
    /// Card fields; required only for card payments.
    pub card: Option<CardDetails>,
}

/// Validate the cart and form and build the order-creation request.
///
/// On success the caller submits via `ApiClient::create_order` and clears the
/// cart.
///
/// # Errors
///
/// Returns a [`CheckoutError`] naming the first failed guard.
pub fn build_order(
    lines: &[CartLineItem],
    form: &CheckoutForm,
) -> Result<CreateOrderRequest, CheckoutError> {
    let first = lines.first().ok_or(CheckoutError::EmptyCart)?;

    if lines.iter().any(|l| l.seller_id != first.seller_id) {
        return Err(CheckoutError::MixedSellers);
    }

    if form.shipping_address.trim().is_empty() {
        return Err(CheckoutError::MissingShippingAddress);
    }

    let card = match form.payment_method {
        PaymentMethod::Card => {
            let card = form
                .card
                .as_ref()
                .ok_or(CheckoutError::IncompleteCardDetails)?;
            if !card.is_complete() {
                return Err(CheckoutError::IncompleteCardDetails);
            }
            Some(card.clone())
        }
        PaymentMethod::Cash => None,
    };

    Ok(CreateOrderRequest {
        shipping_address: form.shipping_address.trim().to_owned(),
        payment_method: form.payment_method,
        items: lines
            .iter()
            .map(|l| OrderItemRequest {
                product: ProductRef { id: l.product_id },
                quantity: l.quantity,
                price: l.unit_price,
            })
            .collect(),
        card,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use kommerce_core::types::{ProductId, SellerId};

    use super::*;

    fn line(id: i64, seller: i64, qty: u32) -> CartLineItem {
        CartLineItem {
            product_id: ProductId::new(id),
            name: format!("Product {id}"),
            unit_price: Decimal::new(105, 1),
            image_url: None,
            quantity: qty,
            seller_id: SellerId::new(seller),
            seller_name: format!("Seller {seller}"),
        }
    }

    fn cash_form() -> CheckoutForm {
        CheckoutForm {
            shipping_address: "12 Harbor St".to_owned(),
            payment_method: PaymentMethod::Cash,
            card: None,
        }
    }

    fn full_card() -> CardDetails {
        CardDetails {
            card_number: "4111111111111111".to_owned(),
            expiry_date: "12/27".to_owned(),
            cvv: "123".to_owned(),
            card_holder: "K Demir".to_owned(),
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        assert_eq!(build_order(&[], &cash_form()), Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn test_mixed_sellers_rejected() {
        let lines = vec![line(1, 1, 1), line(2, 2, 1)];
        assert_eq!(
            build_order(&lines, &cash_form()),
            Err(CheckoutError::MixedSellers)
        );
    }

    #[test]
    fn test_blank_address_rejected() {
        let lines = vec![line(1, 1, 1)];
        let form = CheckoutForm {
            shipping_address: "   ".to_owned(),
            ..cash_form()
        };
        assert_eq!(
            build_order(&lines, &form),
            Err(CheckoutError::MissingShippingAddress)
        );
    }

    #[test]
    fn test_card_without_details_rejected() {
        let lines = vec![line(1, 1, 1)];
        let form = CheckoutForm {
            payment_method: PaymentMethod::Card,
            ..cash_form()
        };
        assert_eq!(
            build_order(&lines, &form),
            Err(CheckoutError::IncompleteCardDetails)
        );

        let form = CheckoutForm {
            payment_method: PaymentMethod::Card,
            card: Some(CardDetails {
                cvv: String::new(),
                ..full_card()
            }),
            ..cash_form()
        };
        assert_eq!(
            build_order(&lines, &form),
            Err(CheckoutError::IncompleteCardDetails)
        );
    }

    #[test]
    fn test_card_with_details_accepted() {
        let lines = vec![line(1, 1, 2)];
        let form = CheckoutForm {
            payment_method: PaymentMethod::Card,
            card: Some(full_card()),
            ..cash_form()
        };

        let request = build_order(&lines, &form).unwrap();
        assert_eq!(request.payment_method, PaymentMethod::Card);
        assert!(request.card.is_some());
    }

    #[test]
    fn test_cash_order_translates_all_lines() {
        let lines = vec![line(1, 1, 2), line(2, 1, 1)];
        let request = build_order(&lines, &cash_form()).unwrap();

        assert_eq!(request.items.len(), 2);
        assert_eq!(request.items[0].product.id, ProductId::new(1));
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(request.items[0].price, Decimal::new(105, 1));
        assert!(request.card.is_none());
    }
}
