//! Turning a product page selection into a cart line.

use thiserror::Error;

use super::CartLineItem;
use crate::catalog::Product;
use crate::types::{LineItemId, Quantity};

/// Reasons an add-to-cart is rejected before it reaches the cart.
///
/// All of these are user-correctable: the shopper picks a size or color and
/// tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddToCartError {
    #[error("please select a size")]
    MissingSize,

    #[error("size {0} is not available for this product")]
    UnknownSize(String),

    #[error("color {0} is not available for this product")]
    UnknownColor(String),
}

/// Build the cart line for a product selection.
///
/// The color defaults to the product's first color, as the product page
/// preselects it. The unit price and image are snapshotted from the product.
///
/// # Errors
///
/// Returns [`AddToCartError::MissingSize`] if no size was chosen, and
/// `UnknownSize` / `UnknownColor` if the selection is not offered.
pub fn line_item_for(
    product: &Product,
    size: Option<&str>,
    color: Option<&str>,
    quantity: Quantity,
) -> Result<CartLineItem, AddToCartError> {
    let size = size
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AddToCartError::MissingSize)?;
    if !product.offers_size(size) {
        return Err(AddToCartError::UnknownSize(size.to_owned()));
    }

    let color = match color.map(str::trim).filter(|c| !c.is_empty()) {
        Some(color) if product.offers_color(color) => color,
        Some(color) => return Err(AddToCartError::UnknownColor(color.to_owned())),
        None => product.colors.first().map_or("", String::as_str),
    };

    Ok(CartLineItem {
        id: LineItemId::compose(&product.id, size, color),
        name: product.name.clone(),
        price: product.price,
        size: size.to_owned(),
        color: color.to_owned(),
        image: product.primary_image().to_owned(),
        quantity,
    })
}
