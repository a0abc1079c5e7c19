//! Catalog queries: the shop listing, a product page, the category tree.

use brunelli_core::ProductId;
use brunelli_core::catalog::{Catalog, FilterSpec, Product, RELATED_PRODUCTS_LIMIT, SortKey};
use rust_decimal::Decimal;
use tracing::info;

/// Listing options, mirroring the shop sidebar.
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub max_price: Option<Decimal>,
    pub sort: SortKey,
}

impl ListOptions {
    /// The filter spec these options describe.
    #[must_use]
    pub fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::default();
        if let Some(category) = &self.category {
            spec.set_category(category);
        }
        if let Some(subcategory) = &self.subcategory {
            spec.set_subcategory(subcategory);
        }
        spec.colors = self.colors.iter().cloned().collect();
        spec.sizes = self.sizes.iter().cloned().collect();
        if let Some(max_price) = self.max_price {
            spec.max_price = max_price;
        }
        spec.sort = self.sort;
        spec
    }
}

fn log_product(product: &Product) {
    info!(
        id = %product.id,
        price = %product.price,
        category = %product.category,
        subcategory = %product.subcategory,
        new = product.is_new,
        bestseller = product.is_bestseller,
        "{}",
        product.name
    );
}

/// Print the filtered, sorted listing.
pub fn list(catalog: &Catalog, options: &ListOptions) {
    let spec = options.to_spec();
    let view = catalog.filter(&spec);
    info!(
        shown = view.len(),
        total = catalog.products.len(),
        sort = %spec.sort,
        "Products"
    );
    for product in view {
        log_product(product);
    }
}

/// Print one product with its related products.
///
/// # Errors
///
/// Returns an error if no product has this id.
pub fn show(catalog: &Catalog, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let product = catalog.product(&ProductId::new(id))?;
    log_product(product);
    if let Some(original) = product.original_price {
        info!(
            original = %original,
            discount_percent = product.discount_percent().unwrap_or(0),
            "On sale"
        );
    }
    info!(colors = %product.colors.join(", "), sizes = %product.sizes.join(", "), "Options");
    for feature in &product.features {
        info!("  - {feature}");
    }
    for related in catalog.related(product, RELATED_PRODUCTS_LIMIT) {
        info!(id = %related.id, price = %related.price, "Related: {}", related.name);
    }
    Ok(())
}

/// Print the category tree.
pub fn categories(catalog: &Catalog) {
    for category in catalog.categories.categories() {
        info!(subcategories = category.subcategories.len(), "{}", category.name);
        for subcategory in &category.subcategories {
            info!("  {subcategory}");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_options_to_spec() {
        let options = ListOptions {
            category: Some("All".to_string()),
            colors: vec!["Black".to_string(), "Black".to_string()],
            max_price: Some(Decimal::from(50)),
            sort: SortKey::PriceLow,
            ..ListOptions::default()
        };
        let spec = options.to_spec();
        assert_eq!(spec.category, None);
        assert_eq!(spec.colors.len(), 1);

        let catalog = Catalog::demo();
        let prices: Vec<_> = catalog
            .filter(&spec)
            .iter()
            .map(|p| p.price.amount)
            .collect();
        assert_eq!(prices, [Decimal::from(35), Decimal::from(45)]);
    }

    #[test]
    fn test_show_unknown_product() {
        assert!(show(&Catalog::demo(), "404").is_err());
    }
}
