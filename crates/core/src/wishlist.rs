//! The wishlist: an insertion-ordered set of products keyed by id.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// A product reference saved to the wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_owned(),
        }
    }
}

/// The session's wishlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<WishlistItem>,
}

impl Wishlist {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Saved items, oldest first.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|i| &i.id == id)
    }

    /// Save an item. Adding an id that is already present changes nothing.
    pub fn add(&mut self, item: WishlistItem) {
        if !self.contains(&item.id) {
            self.items.push(item);
        }
    }

    /// Forget an item. Absent ids are ignored.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.id != id);
    }

    /// Heart-button semantics. Returns whether the item is saved afterwards.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            self.remove(&item.id);
            false
        } else {
            self.items.push(item);
            true
        }
    }
}
