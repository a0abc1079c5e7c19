//! Shipping rules and order summaries.
//!
//! The cart page and the checkout page both render an [`OrderSummary`] built
//! here, so the two can never disagree about shipping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Subtotal at or above which shipping is free (currency units).
pub const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Flat shipping fee charged below the threshold.
pub const SHIPPING_FEE: Decimal = Decimal::from_parts(995, 0, 0, false, 2);

/// Shipping charged on a subtotal.
#[must_use]
pub fn shipping_for(subtotal: Price) -> Price {
    if subtotal.amount >= FREE_SHIPPING_THRESHOLD {
        Price::zero(subtotal.currency_code)
    } else {
        Price::new(SHIPPING_FEE, subtotal.currency_code)
    }
}

/// Subtotal, shipping and grand total of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
    /// How much more the shopper must add for free shipping; zero once
    /// reached.
    pub free_shipping_remaining: Price,
}

impl OrderSummary {
    /// Derive the summary for a subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Price) -> Self {
        let shipping = shipping_for(subtotal);
        let threshold = Price::new(FREE_SHIPPING_THRESHOLD, subtotal.currency_code);
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping,
            free_shipping_remaining: threshold.saturating_sub(subtotal),
        }
    }

    /// Returns true if this order ships free.
    #[must_use]
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }
}
