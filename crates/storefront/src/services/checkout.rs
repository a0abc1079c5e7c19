//! Order placement.
//!
//! There is no payment provider: after validation the service waits for the
//! configured delay, then clears the cart and files the order in the session's
//! history.

use std::time::Duration;

use brunelli_core::cart::{CartAction, CartState};
use brunelli_core::checkout::{CheckoutForm, PlacedOrder, place_order};
use tower_sessions::Session;
use tracing::{info, instrument};

use crate::error::{AppError, add_breadcrumb};
use crate::models::session::{load, store};
use crate::models::session_keys;

/// Session-bound checkout service.
pub struct CheckoutService<'a> {
    session: &'a Session,
    payment_delay: Duration,
}

impl<'a> CheckoutService<'a> {
    #[must_use]
    pub const fn new(session: &'a Session, payment_delay: Duration) -> Self {
        Self {
            session,
            payment_delay,
        }
    }

    /// Validate the form against the session's cart and place the order.
    ///
    /// The order is built from the cart as loaded before the payment delay.
    /// Afterwards the whole cart is cleared, not just the ordered lines, so
    /// anything added to the same session while payment was processing is
    /// discarded along with the ordered items.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` or a form error before any delay,
    /// or a session error.
    #[instrument(skip_all)]
    pub async fn place(&self, form: &CheckoutForm) -> Result<PlacedOrder, AppError> {
        let mut cart: CartState = load(self.session, session_keys::CART).await?;
        let order = place_order(&cart, form)?;

        self.process_payment(&order).await;

        cart.dispatch(CartAction::ClearCart);
        store(self.session, session_keys::CART, &cart).await?;

        let mut orders: Vec<PlacedOrder> = load(self.session, session_keys::ORDERS).await?;
        orders.push(order.clone());
        store(self.session, session_keys::ORDERS, &orders).await?;

        info!(
            order_id = %order.id,
            total = %order.summary.total,
            lines = order.items.len(),
            "Order placed"
        );
        add_breadcrumb("checkout", "Order placed", &[("order_id", order.id.as_str())]);

        Ok(order)
    }

    /// Stand-in for the payment provider round trip.
    async fn process_payment(&self, order: &PlacedOrder) {
        tracing::debug!(order_id = %order.id, delay_ms = self.payment_delay.as_millis(), "Processing payment");
        tokio::time::sleep(self.payment_delay).await;
    }
}
