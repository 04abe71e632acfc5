//! Type-safe price representation using decimal arithmetic.
//!
//! Prices come off the wire as plain JSON numbers, so [`Price`] serializes
//! transparently as its decimal amount. Currency is a display concern only;
//! the backend quotes everything in a single store currency.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount.
///
/// Uses `rust_decimal` rather than floating point so that cart totals are
/// exact. Unit prices are snapshotted into cart lines at add-time and never
/// re-fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero, the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display in a given currency (e.g., `"₺19.99"`).
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format!("{}{:.2}", currency.symbol(), self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    TRY,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::TRY => "₺",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TRY => "TRY",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_display_two_decimal_places() {
        let price = Price::new(Decimal::new(1999, 2)); // 19.99
        assert_eq!(price.to_string(), "19.99");
        assert_eq!(price.display(CurrencyCode::TRY), "₺19.99");
        assert_eq!(price.display(CurrencyCode::USD), "$19.99");
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let price = Price::new(Decimal::new(105, 1)); // 10.5
        assert_eq!(serde_json::to_string(&price).unwrap(), "10.5");
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(price.amount(), Decimal::new(105, 1));
    }

    #[test]
    fn test_zero() {
        assert_eq!(Price::ZERO.amount(), Decimal::ZERO);
    }
}
