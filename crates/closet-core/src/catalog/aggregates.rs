use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::product::Product;

/// Whole-catalog facts used to populate filter choices and brand badges.
///
/// Always computed from the unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogAggregates {
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub product_types: Vec<String>,
    pub brand_counts: BTreeMap<String, usize>,
}

impl CatalogAggregates {
    pub fn from_products(products: &[Product]) -> Self {
        let mut brand_counts = BTreeMap::new();
        for product in products {
            *brand_counts.entry(product.brand.clone()).or_insert(0) += 1;
        }

        Self {
            brands: distinct(products.iter().map(|p| p.brand.as_str())),
            colors: distinct(products.iter().map(|p| p.color.as_str())),
            product_types: distinct(products.iter().map(|p| p.product_type.as_str())),
            brand_counts,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Brands ordered by count, highest first, truncated to `limit`.
///
/// Brands with equal counts keep the order in which they first appear in
/// the collection.
pub fn top_brands(products: &[Product], limit: usize) -> Vec<(String, usize)> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for product in products {
        match position.get(product.brand.as_str()) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                position.insert(&product.brand, counts.len());
                counts.push((product.brand.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
