//! Product catalog.
//!
//! The catalog is a small, read-mostly list of products plus a two-level
//! category tree. Shoppers only ever read it; the admin panel edits it through
//! [`store::CatalogStore`].

pub mod filter;
pub mod fixture;
pub mod store;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId, StockStatus};

pub use filter::{Facets, FilterSpec, SortKey, UnknownSortKey};
pub use store::{CatalogError, CatalogStore, ProductDraft, ProductPatch};

/// Number of related products shown on a product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-sale price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub category: String,
    pub subcategory: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

const fn default_true() -> bool {
    true
}

impl Product {
    /// The image used for cart lines, wishlist entries and listing tiles.
    #[must_use]
    pub fn primary_image(&self) -> &str {
        self.images.first().map_or("", String::as_str)
    }

    /// Whole-percent discount relative to `original_price`, if any.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount;
        if original <= self.price.amount || original.is_zero() {
            return None;
        }
        let percent = (original - self.price.amount) / original * Decimal::ONE_HUNDRED;
        percent.round().try_into().ok()
    }

    /// Returns true if the product is offered in `size`.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Returns true if the product is offered in `color`.
    #[must_use]
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Stock availability.
    #[must_use]
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from(self.in_stock)
    }
}

/// A top-level category and its subcategories, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

/// The ordered category → subcategory mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTree(Vec<Category>);

impl CategoryTree {
    /// Build a tree from categories in display order.
    #[must_use]
    pub const fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    /// Category names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.name.as_str())
    }

    /// Look up a category by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.0.iter().find(|c| c.name == name)
    }

    /// Subcategory choices for a selected category.
    ///
    /// Empty for `None` (the "All" selection) and for unknown categories.
    #[must_use]
    pub fn subcategories(&self, category: Option<&str>) -> &[String] {
        category
            .and_then(|name| self.get(name))
            .map(|c| c.subcategories.as_slice())
            .unwrap_or_default()
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.0.iter_mut().find(|c| c.name == name)
    }

    pub(crate) fn push(&mut self, category: Category) {
        self.0.push(category);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Category> {
        let index = self.0.iter().position(|c| c.name == name)?;
        Some(self.0.remove(index))
    }
}

/// Error returned when a product id does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductLookupError {
    /// No product has this id.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

/// The product list and category tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: CategoryTree,
}

impl Catalog {
    /// Create a catalog.
    #[must_use]
    pub const fn new(products: Vec<Product>, categories: CategoryTree) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, two products share an id,
    /// or a product is priced outside [`crate::types::STORE_CURRENCY`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        for (i, product) in catalog.products.iter().enumerate() {
            store::check_currency(product)?;
            let duplicated = catalog
                .products
                .iter()
                .skip(i + 1)
                .any(|other| other.id == product.id);
            if duplicated {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ProductLookupError::NotFound`] if no product has this id.
    pub fn product(&self, id: &ProductId) -> Result<&Product, ProductLookupError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| ProductLookupError::NotFound(id.clone()))
    }

    /// Products in the same category as `product`, excluding it, in catalog
    /// order.
    #[must_use]
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Run the filter/sort pipeline over this catalog.
    #[must_use]
    pub fn filter(&self, spec: &FilterSpec) -> Vec<&Product> {
        filter::apply(&self.products, spec)
    }

    /// Distinct colors and sizes across every product.
    #[must_use]
    pub fn facets(&self) -> Facets {
        Facets::from_products(&self.products)
    }
}
