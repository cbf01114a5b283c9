use std::collections::BTreeMap;

use closet_core::catalog::{
    Closet, FilterState, Product, SortDirection, SortKey, TOP_BRANDS_LIMIT,
};
use serde::Serialize;

/// Everything the closet screen renders, in one serialisable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosetSnapshot {
    pub products: Vec<ProductCard>,
    pub total_products: usize,
    pub filters: FilterState,
    pub active_filter_count: usize,
    pub available_filters: AvailableFilters,
    pub brand_counts: BTreeMap<String, usize>,
    pub top_brands: Vec<BrandCount>,
    pub sort_by: SortKey,
    pub sort_direction: SortDirection,
    pub search_query: String,
}

/// One grid card. `key` is positional because product names repeat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub key: String,
    pub name: String,
    pub brand: String,
    pub color: String,
    pub product_type: String,
    pub size: String,
    pub price: String,
    pub image_url: String,
    pub product_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailableFilters {
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub product_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

impl ProductCard {
    fn new(index: usize, product: &Product) -> Self {
        Self {
            key: format!("{}-{}", product.name, index),
            name: product.name.clone(),
            brand: product.brand.clone(),
            color: product.color.clone(),
            product_type: product.product_type.clone(),
            size: product.size.clone(),
            price: product.price.display.clone(),
            image_url: product.image_url.clone(),
            product_url: product.product_url.clone(),
        }
    }
}

impl From<&Closet> for ClosetSnapshot {
    fn from(closet: &Closet) -> Self {
        let aggregates = closet.aggregates();
        let sort = closet.sort();

        Self {
            products: closet
                .derive()
                .into_iter()
                .enumerate()
                .map(|(index, product)| ProductCard::new(index, product))
                .collect(),
            total_products: closet.total_products(),
            filters: closet.filters().clone(),
            active_filter_count: closet.active_filter_count(),
            available_filters: AvailableFilters {
                brands: aggregates.brands,
                colors: aggregates.colors,
                product_types: aggregates.product_types,
            },
            brand_counts: aggregates.brand_counts,
            top_brands: closet
                .top_brands(TOP_BRANDS_LIMIT)
                .into_iter()
                .map(|(brand, count)| BrandCount { brand, count })
                .collect(),
            sort_by: sort.key,
            sort_direction: sort.direction,
            search_query: closet.search_query().to_string(),
        }
    }
}
