//! Catalog route handlers: shop listing, product detail, category tree.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use brunelli_core::ProductId;
use brunelli_core::catalog::{
    CategoryTree, Facets, FilterSpec, Product, RELATED_PRODUCTS_LIMIT, SortKey,
};
use brunelli_core::types::StockStatus;
use brunelli_core::wishlist::Wishlist;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session::load;
use crate::models::session_keys;
use crate::state::AppState;

/// Shop listing query string.
///
/// `colors` and `sizes` are comma-separated; `category` / `subcategory`
/// override the path segments of `/shop/...`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub colors: Option<String>,
    pub sizes: Option<String>,
    pub max_price: Option<Decimal>,
    pub sort: Option<String>,
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

impl CatalogQuery {
    /// Layer the query string over a path-derived spec.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown sort label or a negative price ceiling.
    pub fn apply_to(self, mut spec: FilterSpec) -> Result<FilterSpec> {
        if let Some(category) = self.category {
            spec.set_category(&category);
        }
        if let Some(subcategory) = self.subcategory {
            spec.set_subcategory(&subcategory);
        }
        if let Some(colors) = self.colors {
            spec.colors = split_list(&colors).collect();
        }
        if let Some(sizes) = self.sizes {
            spec.sizes = split_list(&sizes).collect();
        }
        if let Some(max_price) = self.max_price {
            if max_price.is_sign_negative() {
                return Err(AppError::BadRequest(
                    "max_price cannot be negative".to_string(),
                ));
            }
            spec.max_price = max_price;
        }
        if let Some(sort) = self.sort.filter(|s| !s.trim().is_empty()) {
            spec.sort = sort.trim().parse::<SortKey>()?;
        }
        Ok(spec)
    }
}

/// Shop listing response.
#[derive(Debug, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub count: usize,
    pub filters: FilterSpec,
    /// Every color and size in the catalog, for the filter sidebar.
    pub facets: Facets,
    /// Subcategories of the selected category (empty when none is selected).
    pub subcategories: Vec<String>,
}

/// Product detail response.
#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub product: Product,
    pub discount_percent: Option<u32>,
    pub stock_status: StockStatus,
    pub in_wishlist: bool,
    pub related: Vec<Product>,
}

async fn listing(state: &AppState, spec: FilterSpec) -> ProductListing {
    let store = state.catalog().read().await;
    let catalog = store.catalog();
    let products: Vec<Product> = catalog.filter(&spec).into_iter().cloned().collect();
    let subcategories = catalog
        .categories
        .subcategories(spec.category.as_deref())
        .to_vec();

    ProductListing {
        count: products.len(),
        products,
        facets: catalog.facets(),
        subcategories,
        filters: spec,
    }
}

/// Filtered, sorted product listing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ProductListing>> {
    let spec = query.apply_to(FilterSpec::default())?;
    Ok(Json(listing(&state, spec).await))
}

/// `/shop/{category}`.
#[instrument(skip(state))]
pub async fn shop_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ProductListing>> {
    let spec = query.apply_to(FilterSpec::for_path(Some(&category), None))?;
    Ok(Json(listing(&state, spec).await))
}

/// `/shop/{category}/{subcategory}`.
#[instrument(skip(state))]
pub async fn shop_subcategory(
    State(state): State<AppState>,
    Path((category, subcategory)): Path<(String, String)>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<ProductListing>> {
    let spec = query.apply_to(FilterSpec::for_path(Some(&category), Some(&subcategory)))?;
    Ok(Json(listing(&state, spec).await))
}

/// Product detail with up to four related products.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<ProductDetail>> {
    let id = ProductId::new(id);
    let wishlist: Wishlist = load(&session, session_keys::WISHLIST).await?;

    let store = state.catalog().read().await;
    let catalog = store.catalog();
    let product = catalog.product(&id)?;

    Ok(Json(ProductDetail {
        discount_percent: product.discount_percent(),
        stock_status: product.stock_status(),
        in_wishlist: wishlist.contains(&id),
        related: catalog
            .related(product, RELATED_PRODUCTS_LIMIT)
            .into_iter()
            .cloned()
            .collect(),
        product: product.clone(),
    }))
}

/// The category tree.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<CategoryTree> {
    let store = state.catalog().read().await;
    Json(store.catalog().categories.clone())
}
