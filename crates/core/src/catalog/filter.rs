//! The shop page's filter-and-sort pipeline.
//!
//! [`apply`] is a pure function of a product slice and a [`FilterSpec`]: it
//! narrows by category, subcategory, colors, sizes and price, then stably
//! sorts by the requested key. The source slice is never reordered.

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Product;

/// Default inclusive price ceiling of the price slider.
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Label of the catch-all category and subcategory selection.
pub const ALL: &str = "All";

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    /// New arrivals first.
    Newest,
    /// Bestsellers first.
    Bestseller,
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
}

impl SortKey {
    /// Every sort key, in dropdown order.
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::Newest,
        Self::Bestseller,
        Self::PriceLow,
        Self::PriceHigh,
    ];

    /// The kebab-case label used in query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Newest => "newest",
            Self::Bestseller => "bestseller",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sort label that names no [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_owned()))
    }
}

/// The active facet selections driving the shop view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact category match; `None` selects all categories.
    pub category: Option<String>,
    /// Case-insensitive subcategory match; `None` selects all.
    pub subcategory: Option<String>,
    /// A product passes if it offers at least one of these colors.
    pub colors: BTreeSet<String>,
    /// A product passes if it offers at least one of these sizes.
    pub sizes: BTreeSet<String>,
    /// Inclusive upper price bound. The lower bound is fixed at zero.
    pub max_price: Decimal,
    pub sort: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: None,
            subcategory: None,
            colors: BTreeSet::new(),
            sizes: BTreeSet::new(),
            max_price: DEFAULT_MAX_PRICE,
            sort: SortKey::Featured,
        }
    }
}

/// Map a control value to a selection. [`ALL`] in any ASCII case, and blank
/// or whitespace-only values, select everything; route slugs arrive
/// upper-cased (`/shop/all` becomes `"ALL"`).
fn selection(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(value.to_owned())
    }
}

impl FilterSpec {
    /// Build the spec for a `/shop/{category}/{subcategory}` route.
    ///
    /// The category slug is upper-cased with hyphens turned into spaces
    /// (`post-partum` → `POST PARTUM`); the subcategory slug only has its
    /// hyphens replaced, since subcategories match case-insensitively.
    #[must_use]
    pub fn for_path(category: Option<&str>, subcategory: Option<&str>) -> Self {
        Self {
            category: category.and_then(|c| selection(&c.to_uppercase().replace('-', " "))),
            subcategory: subcategory.and_then(|s| selection(&s.replace('-', " "))),
            ..Self::default()
        }
    }

    /// Select a category. Any subcategory selection is cleared with it.
    ///
    /// `"All"` matches case-insensitively, so `"all"` and `"ALL"` also clear
    /// the category, as does a blank value. Any other value is trimmed and
    /// kept verbatim; categories compare exactly.
    pub fn set_category(&mut self, category: &str) {
        self.category = selection(category);
        self.subcategory = None;
    }

    /// Select a subcategory within the current category. `"All"` (in any
    /// case) and blanks clear the selection.
    pub fn set_subcategory(&mut self, subcategory: &str) {
        self.subcategory = selection(subcategory);
    }

    /// Checkbox semantics: select the color if absent, deselect otherwise.
    pub fn toggle_color(&mut self, color: &str) {
        toggle(&mut self.colors, color);
    }

    /// Checkbox semantics: select the size if absent, deselect otherwise.
    pub fn toggle_size(&mut self, size: &str) {
        toggle(&mut self.sizes, size);
    }

    /// Return to the defaults: everything selected, ceiling 500, featured.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true if no facet narrows the catalog.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_none()
            && self.subcategory.is_none()
            && self.colors.is_empty()
            && self.sizes.is_empty()
            && self.max_price >= DEFAULT_MAX_PRICE
    }

    /// Returns true if `product` passes every facet of this spec.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && product.category != *category
        {
            return false;
        }
        if let Some(subcategory) = &self.subcategory
            && !product.subcategory.eq_ignore_ascii_case(subcategory)
        {
            return false;
        }
        if !self.colors.is_empty() && !product.colors.iter().any(|c| self.colors.contains(c)) {
            return false;
        }
        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }
        product.price.amount >= Decimal::ZERO && product.price.amount <= self.max_price
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_owned());
    }
}

/// Run the pipeline: narrow `products` by `spec`, then stably sort.
#[must_use]
pub fn apply<'a>(products: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    let mut view: Vec<&Product> = products.iter().filter(|p| spec.matches(p)).collect();

    match spec.sort {
        SortKey::Featured => {}
        SortKey::Newest => view.sort_by_key(|p| Reverse(p.is_new)),
        SortKey::Bestseller => view.sort_by_key(|p| Reverse(p.is_bestseller)),
        SortKey::PriceLow => view.sort_by_key(|p| p.price.amount),
        SortKey::PriceHigh => view.sort_by_key(|p| Reverse(p.price.amount)),
    }

    view
}

/// Distinct facet values offered by a set of products, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

impl Facets {
    /// Collect the distinct colors and sizes of `products`.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let mut facets = Self::default();
        for product in products {
            push_unique(&mut facets.colors, &product.colors);
            push_unique(&mut facets.sizes, &product.sizes);
        }
        facets
    }
}

fn push_unique(into: &mut Vec<String>, values: &[String]) {
    for value in values {
        if !into.contains(value) {
            into.push(value.clone());
        }
    }
}
