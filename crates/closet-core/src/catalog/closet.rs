//! Catalog query engine.
//!
//! Holds the product collection together with the user's filter, sort and
//! search state, and derives the visible view from them on demand. The
//! view is recomputed in full on every call; catalogs are small enough
//! that no caching is needed.

use serde::{Deserialize, Serialize};

use super::aggregates::{top_brands, CatalogAggregates};
use super::filter::{FilterDimension, FilterState};
use super::product::Product;
use super::sort::{SortKey, SortSpec};

/// Number of brands shown in the brand badge strip.
pub const TOP_BRANDS_LIMIT: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Closet {
    products: Vec<Product>,
    filters: FilterState,
    sort: SortSpec,
    search_query: String,
}

impl Closet {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total_products(&self) -> usize {
        self.products.len()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Search, then filter, then stable sort.
    pub fn derive(&self) -> Vec<&Product> {
        let needle = self.search_query.to_lowercase();

        let mut view: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| needle.is_empty() || p.matches_search(&needle))
            .filter(|p| self.filters.accepts(p))
            .collect();

        // sort_by is stable
        view.sort_by(|a, b| self.sort.compare(a, b));
        view
    }

    pub fn aggregates(&self) -> CatalogAggregates {
        CatalogAggregates::from_products(&self.products)
    }

    pub fn top_brands(&self, limit: usize) -> Vec<(String, usize)> {
        top_brands(&self.products, limit)
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_filter(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        self.filters.toggle(dimension, value);
    }

    /// Clears every filter dimension and the search query together.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.search_query.clear();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
    }

    /// Removes every product with exactly this name. Returns how many were
    /// removed; zero when nothing matched.
    pub fn remove_product(&mut self, name: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.name != name);
        let removed = before - self.products.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(product = name, removed, "catalog products removed");

        removed
    }
}
