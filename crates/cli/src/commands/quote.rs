//! Quote a cart: run selections through the cart state machine and print the
//! order summary the checkout page would show.

use std::str::FromStr;

use brunelli_core::ProductId;
use brunelli_core::Quantity;
use brunelli_core::cart::{CartAction, CartState, line_item_for};
use brunelli_core::catalog::Catalog;
use thiserror::Error;
use tracing::info;

/// A cart selection given on the command line as `ID:SIZE[:COLOR[:QTY]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpec {
    pub product_id: ProductId,
    pub size: String,
    pub color: Option<String>,
    pub quantity: Quantity,
}

/// Malformed `--item` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemSpecError {
    #[error("expected ID:SIZE[:COLOR[:QTY]], got {0:?}")]
    Format(String),
    #[error("invalid quantity {0:?}")]
    Quantity(String),
}

impl FromStr for ItemSpec {
    type Err = ItemSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let (id, size, color, quantity) = match parts.as_slice() {
            [id, size] => (*id, *size, None, None),
            [id, size, color] => (*id, *size, Some(*color), None),
            [id, size, color, quantity] => (*id, *size, Some(*color), Some(*quantity)),
            _ => return Err(ItemSpecError::Format(s.to_owned())),
        };
        if id.is_empty() || size.is_empty() {
            return Err(ItemSpecError::Format(s.to_owned()));
        }

        let quantity = quantity
            .map(|q| {
                q.parse::<i64>()
                    .map(Quantity::new)
                    .map_err(|_| ItemSpecError::Quantity(q.to_owned()))
            })
            .transpose()?
            .unwrap_or(Quantity::ONE);

        Ok(Self {
            product_id: ProductId::new(id),
            size: size.to_owned(),
            color: color.filter(|c| !c.is_empty()).map(str::to_owned),
            quantity,
        })
    }
}

/// Build the cart for `items`, in order.
///
/// # Errors
///
/// Returns an error if a product id is unknown or a selection is not offered.
pub fn build_cart(
    catalog: &Catalog,
    items: &[ItemSpec],
) -> Result<CartState, Box<dyn std::error::Error>> {
    let mut cart = CartState::new();
    for item in items {
        let product = catalog.product(&item.product_id)?;
        let line = line_item_for(
            product,
            Some(item.size.as_str()),
            item.color.as_deref(),
            item.quantity,
        )?;
        cart.dispatch(CartAction::AddItem(line));
    }
    Ok(cart)
}

/// Print a quote for `items`.
///
/// # Errors
///
/// See [`build_cart`].
pub fn run(catalog: &Catalog, items: &[ItemSpec]) -> Result<(), Box<dyn std::error::Error>> {
    let cart = build_cart(catalog, items)?;
    for line in cart.items() {
        info!(
            id = %line.id,
            quantity = line.quantity.get(),
            unit = %line.price,
            total = %line.line_total(),
            "{}",
            line.name
        );
    }

    let summary = cart.summary();
    info!(
        items = cart.item_count(),
        subtotal = %summary.subtotal,
        shipping = %summary.shipping,
        total = %summary.total,
        "Order summary"
    );
    if !summary.ships_free() {
        info!("Add {} more for free shipping", summary.free_shipping_remaining);
    }
    Ok(())
}
