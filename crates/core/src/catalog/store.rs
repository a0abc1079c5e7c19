//! Admin-side catalog store.
//!
//! [`CatalogStore`] owns a [`Catalog`] and exposes the admin panel's commands
//! (product and category CRUD). It keeps the catalog in memory only; whoever
//! owns the store decides how it is shared.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::{Catalog, Category, Product};
use crate::types::{CurrencyCode, Price, ProductId, STORE_CURRENCY};

/// Errors raised by catalog commands.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error("category already exists: {0}")]
    CategoryExists(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("subcategory {subcategory} already exists in {category}")]
    SubcategoryExists {
        category: String,
        subcategory: String,
    },

    #[error("subcategory {subcategory} not found in {category}")]
    SubcategoryNotFound {
        category: String,
        subcategory: String,
    },

    #[error("invalid product: {0}")]
    InvalidProduct(&'static str),

    #[error("product {product} is priced in {currency}, the store trades in {}", STORE_CURRENCY)]
    ForeignCurrency {
        product: ProductId,
        currency: CurrencyCode,
    },

    #[error("no product id left after {0}")]
    IdSpaceExhausted(u64),

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A product as entered in the admin form, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub original_price: Option<Price>,
    pub category: String,
    pub subcategory: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_bestseller: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

/// A partial product update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
    pub original_price: Option<Option<Price>>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_new: Option<bool>,
    pub is_bestseller: Option<bool>,
    pub in_stock: Option<bool>,
}

/// Drop blank entries the admin form leaves behind.
fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    if product.name.trim().is_empty() {
        return Err(CatalogError::InvalidProduct("name is required"));
    }
    if product.colors.is_empty() {
        return Err(CatalogError::InvalidProduct("at least one color is required"));
    }
    if product.sizes.is_empty() {
        return Err(CatalogError::InvalidProduct("at least one size is required"));
    }
    if product.price.amount.is_sign_negative() {
        return Err(CatalogError::InvalidProduct("price cannot be negative"));
    }
    check_currency(product)
}

/// Cart totals fold prices together, so every price must share one currency.
pub(super) fn check_currency(product: &Product) -> Result<(), CatalogError> {
    let foreign = std::iter::once(product.price)
        .chain(product.original_price)
        .find(|price| price.currency_code != STORE_CURRENCY);
    match foreign {
        Some(price) => Err(CatalogError::ForeignCurrency {
            product: product.id.clone(),
            currency: price.currency_code,
        }),
        None => Ok(()),
    }
}

impl ProductDraft {
    fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name.trim().to_owned(),
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            subcategory: self.subcategory,
            colors: non_blank(self.colors),
            sizes: non_blank(self.sizes),
            images: non_blank(self.images),
            description: self.description,
            features: non_blank(self.features),
            is_new: self.is_new,
            is_bestseller: self.is_bestseller,
            in_stock: self.in_stock,
        }
    }
}

impl ProductPatch {
    fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name.trim().to_owned();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(original_price) = self.original_price {
            product.original_price = original_price;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(subcategory) = self.subcategory {
            product.subcategory = subcategory;
        }
        if let Some(colors) = self.colors {
            product.colors = non_blank(colors);
        }
        if let Some(sizes) = self.sizes {
            product.sizes = non_blank(sizes);
        }
        if let Some(images) = self.images {
            product.images = non_blank(images);
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(features) = self.features {
            product.features = non_blank(features);
        }
        if let Some(is_new) = self.is_new {
            product.is_new = is_new;
        }
        if let Some(is_bestseller) = self.is_bestseller {
            product.is_bestseller = is_bestseller;
        }
        if let Some(in_stock) = self.in_stock {
            product.in_stock = in_stock;
        }
    }
}

/// In-memory catalog with the admin panel's command interface.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
}

impl CatalogStore {
    /// Wrap an existing catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Read access to the current catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Next free numeric id (one past the largest numeric id in use).
    fn next_id(&self) -> Result<ProductId, CatalogError> {
        let max = self
            .catalog
            .products
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next = max
            .checked_add(1)
            .ok_or(CatalogError::IdSpaceExhausted(max))?;
        Ok(ProductId::new(next.to_string()))
    }

    /// Add a product and return its new id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidProduct`] if the draft has no name, no
    /// colors, no sizes or a negative price, [`CatalogError::ForeignCurrency`]
    /// for a price outside the store currency, and
    /// [`CatalogError::IdSpaceExhausted`] when the largest numeric id is
    /// `u64::MAX`.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<ProductId, CatalogError> {
        let id = self.next_id()?;
        let product = draft.into_product(id.clone());
        validate(&product)?;
        info!(product_id = %id, name = %product.name, "Adding product");
        self.catalog.products.push(product);
        Ok(id)
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] for unknown ids and
    /// [`CatalogError::InvalidProduct`] or [`CatalogError::ForeignCurrency`]
    /// if the result would be invalid; the product is left untouched.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<&Product, CatalogError> {
        let slot = self
            .catalog
            .products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;

        let mut updated = slot.clone();
        patch.apply(&mut updated);
        validate(&updated)?;

        info!(product_id = %id, "Updating product");
        *slot = updated;
        Ok(slot)
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] for unknown ids.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<Product, CatalogError> {
        let index = self
            .catalog
            .products
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;
        info!(product_id = %id, "Deleting product");
        Ok(self.catalog.products.remove(index))
    }

    /// Append a new, empty category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryExists`] if the name is taken.
    pub fn add_category(&mut self, name: &str) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::InvalidProduct("category name is required"));
        }
        if self.catalog.categories.get(name).is_some() {
            return Err(CatalogError::CategoryExists(name.to_owned()));
        }
        info!(category = %name, "Adding category");
        self.catalog.categories.push(Category {
            name: name.to_owned(),
            subcategories: Vec::new(),
        });
        Ok(())
    }

    /// Remove a category and its subcategories.
    ///
    /// Products filed under it stay in the catalog; they simply stop showing
    /// up in category navigation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] if no category has this name.
    pub fn delete_category(&mut self, name: &str) -> Result<(), CatalogError> {
        self.catalog
            .categories
            .remove(name)
            .ok_or_else(|| CatalogError::CategoryNotFound(name.to_owned()))?;
        info!(category = %name, "Deleting category");
        Ok(())
    }

    /// Append a subcategory to a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] or
    /// [`CatalogError::SubcategoryExists`] (compared case-insensitively).
    pub fn add_subcategory(&mut self, category: &str, subcategory: &str) -> Result<(), CatalogError> {
        let subcategory = subcategory.trim();
        if subcategory.is_empty() {
            return Err(CatalogError::InvalidProduct("subcategory name is required"));
        }
        let entry = self
            .catalog
            .categories
            .get_mut(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.to_owned()))?;
        if entry
            .subcategories
            .iter()
            .any(|s| s.eq_ignore_ascii_case(subcategory))
        {
            return Err(CatalogError::SubcategoryExists {
                category: category.to_owned(),
                subcategory: subcategory.to_owned(),
            });
        }
        info!(category = %category, subcategory = %subcategory, "Adding subcategory");
        entry.subcategories.push(subcategory.to_owned());
        Ok(())
    }

    /// Remove a subcategory from a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] or
    /// [`CatalogError::SubcategoryNotFound`].
    pub fn delete_subcategory(
        &mut self,
        category: &str,
        subcategory: &str,
    ) -> Result<(), CatalogError> {
        let entry = self
            .catalog
            .categories
            .get_mut(category)
            .ok_or_else(|| CatalogError::CategoryNotFound(category.to_owned()))?;
        let before = entry.subcategories.len();
        entry.subcategories.retain(|s| s != subcategory);
        if entry.subcategories.len() == before {
            return Err(CatalogError::SubcategoryNotFound {
                category: category.to_owned(),
                subcategory: subcategory.to_owned(),
            });
        }
        info!(category = %category, subcategory = %subcategory, "Deleting subcategory");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Maternity Lounge Set".to_owned(),
            price: Price::eur(79),
            original_price: None,
            category: "CLOTHING".to_owned(),
            subcategory: "Lounge Wear".to_owned(),
            colors: vec!["Grey".to_owned(), "  ".to_owned()],
            sizes: vec!["S".to_owned(), "M".to_owned(), String::new()],
            images: vec![String::new()],
            description: "Soft lounge set.".to_owned(),
            features: vec![],
            is_new: true,
            is_bestseller: false,
            in_stock: true,
        }
    }

    #[test]
    fn test_add_product_assigns_next_id_and_drops_blanks() {
        let mut store = CatalogStore::new(Catalog::demo());
        let id = store.add_product(draft()).unwrap();
        assert_eq!(id, ProductId::new("7"));

        let product = store.catalog().product(&id).unwrap();
        assert_eq!(product.colors, ["Grey"]);
        assert_eq!(product.sizes, ["S", "M"]);
        assert!(product.images.is_empty());
    }

    #[test]
    fn test_add_product_rejects_missing_sizes() {
        let mut store = CatalogStore::new(Catalog::demo());
        let mut bad = draft();
        bad.sizes = vec![" ".to_owned()];
        assert!(matches!(
            store.add_product(bad),
            Err(CatalogError::InvalidProduct(_))
        ));
        assert_eq!(store.catalog().products.len(), 6);
    }

    #[test]
    fn test_update_product_patch() {
        let mut store = CatalogStore::new(Catalog::demo());
        let id = ProductId::new("2");
        let patch = ProductPatch {
            price: Some(Price::eur(39)),
            in_stock: Some(false),
            ..ProductPatch::default()
        };
        let updated = store.update_product(&id, patch).unwrap();
        assert_eq!(updated.price, Price::eur(39));
        assert!(!updated.in_stock);
        assert_eq!(updated.name, "Nursing Support Bra");
    }

    #[test]
    fn test_update_product_invalid_leaves_original() {
        let mut store = CatalogStore::new(Catalog::demo());
        let id = ProductId::new("2");
        let patch = ProductPatch {
            colors: Some(vec![]),
            ..ProductPatch::default()
        };
        assert!(store.update_product(&id, patch).is_err());
        assert_eq!(store.catalog().product(&id).unwrap().colors.len(), 3);
    }

    #[test]
    fn test_delete_product() {
        let mut store = CatalogStore::new(Catalog::demo());
        let removed = store.delete_product(&ProductId::new("3")).unwrap();
        assert_eq!(removed.name, "Postpartum Recovery Shorts");
        assert!(matches!(
            store.delete_product(&ProductId::new("3")),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_category_crud() {
        let mut store = CatalogStore::new(Catalog::demo());
        store.add_category("MATERNITY SWIM").unwrap();
        assert!(matches!(
            store.add_category("MATERNITY SWIM"),
            Err(CatalogError::CategoryExists(_))
        ));

        store.add_subcategory("MATERNITY SWIM", "Swimsuits").unwrap();
        assert!(matches!(
            store.add_subcategory("MATERNITY SWIM", "swimsuits"),
            Err(CatalogError::SubcategoryExists { .. })
        ));
        assert_eq!(
            store.catalog().categories.subcategories(Some("MATERNITY SWIM")),
            ["Swimsuits"]
        );

        store.delete_subcategory("MATERNITY SWIM", "Swimsuits").unwrap();
        assert!(matches!(
            store.delete_subcategory("MATERNITY SWIM", "Swimsuits"),
            Err(CatalogError::SubcategoryNotFound { .. })
        ));

        store.delete_category("MATERNITY SWIM").unwrap();
        assert!(matches!(
            store.delete_category("MATERNITY SWIM"),
            Err(CatalogError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_next_id_after_delete_does_not_reuse_max() {
        let mut store = CatalogStore::new(Catalog::demo());
        store.delete_product(&ProductId::new("2")).unwrap();
        assert_eq!(store.add_product(draft()).unwrap(), ProductId::new("7"));
    }

    #[test]
    fn test_add_product_rejects_foreign_currency() {
        let mut store = CatalogStore::new(Catalog::demo());
        let mut usd = draft();
        usd.price = Price::new(rust_decimal::Decimal::from(10), CurrencyCode::USD);
        assert!(matches!(
            store.add_product(usd),
            Err(CatalogError::ForeignCurrency {
                currency: CurrencyCode::USD,
                ..
            })
        ));

        let mut gbp_original = draft();
        gbp_original.original_price = Some(Price::new(
            rust_decimal::Decimal::from(99),
            CurrencyCode::GBP,
        ));
        assert!(store.add_product(gbp_original).is_err());
        assert_eq!(store.catalog().products.len(), 6);
    }

    #[test]
    fn test_update_product_rejects_foreign_currency() {
        let mut store = CatalogStore::new(Catalog::demo());
        let id = ProductId::new("2");
        let patch = ProductPatch {
            price: Some(Price::new(rust_decimal::Decimal::from(10), CurrencyCode::USD)),
            ..ProductPatch::default()
        };
        assert!(store.update_product(&id, patch).is_err());

        let bra = store.catalog().product(&id).unwrap();
        assert_eq!(bra.price, Price::eur(45));
    }

    #[test]
    fn test_next_id_at_u64_max_is_an_error() {
        let mut catalog = Catalog::demo();
        catalog.products[0].id = ProductId::new(u64::MAX.to_string());
        let mut store = CatalogStore::new(catalog);

        assert!(matches!(
            store.add_product(draft()),
            Err(CatalogError::IdSpaceExhausted(u64::MAX))
        ));
        assert_eq!(store.catalog().products.len(), 6);
    }

    #[test]
    fn test_next_id_ignores_non_numeric_ids() {
        let mut catalog = Catalog::demo();
        catalog.products[5].id = ProductId::new("bump-butter");
        let mut store = CatalogStore::new(catalog);
        assert_eq!(store.add_product(draft()).unwrap(), ProductId::new("6"));
    }
}
