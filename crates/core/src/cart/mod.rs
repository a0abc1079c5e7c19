//! The shopping-cart state machine.
//!
//! A [`CartState`] is an insertion-ordered list of [`CartLineItem`]s. It only
//! changes through [`CartAction`]s, applied synchronously by
//! [`CartState::reduce`] / [`CartState::dispatch`]. The subtotal is never
//! stored: it is folded from the current items on every read.

mod line_item;

use serde::{Deserialize, Serialize};

use crate::pricing::OrderSummary;
use crate::types::{CurrencyCode, LineItemId, Price, Quantity};

pub use line_item::{AddToCartError, line_item_for};

/// One row in the cart, unique per product, size and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: LineItemId,
    pub name: String,
    /// Unit price captured when the item was added.
    pub price: Price,
    pub size: String,
    pub color: String,
    pub image: String,
    pub quantity: Quantity,
}

impl CartLineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Cart transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    /// Append the item, or grow the quantity of the line with the same id.
    AddItem(CartLineItem),
    /// Set a line's quantity. Values below 1 clamp to 1; the line stays.
    UpdateQuantity { id: LineItemId, quantity: i64 },
    /// Delete a line. Unknown ids are ignored.
    RemoveItem(LineItemId),
    /// Empty the cart.
    ClearCart,
}

/// The session's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (the header badge count).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Σ(unit price × quantity) over the current lines.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or(CurrencyCode::default(), |i| i.price.currency_code);
        self.items
            .iter()
            .map(CartLineItem::line_total)
            .fold(Price::zero(currency), |acc, line| acc + line)
    }

    /// Subtotal, shipping and total for the cart and checkout summaries.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_subtotal(self.subtotal())
    }

    /// Pure transition: consume this state and return the next one.
    #[must_use]
    pub fn reduce(mut self, action: CartAction) -> Self {
        self.dispatch(action);
        self
    }

    /// Apply an action in place.
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(item) => self.add(item),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(&id, quantity),
            CartAction::RemoveItem(id) => self.remove(&id),
            CartAction::ClearCart => self.clear(),
        }
    }

    fn add(&mut self, item: CartLineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            self.items.push(item);
        }
    }

    fn update_quantity(&mut self, id: &LineItemId, quantity: i64) {
        if let Some(line) = self.items.iter_mut().find(|i| &i.id == id) {
            line.quantity = Quantity::new(quantity);
        }
    }

    fn remove(&mut self, id: &LineItemId) {
        self.items.retain(|i| &i.id != id);
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
