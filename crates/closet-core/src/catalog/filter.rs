use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::product::Product;

/// One independent, set-valued filter constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Brand,
    Color,
    ProductType,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 3] = [
        FilterDimension::Brand,
        FilterDimension::Color,
        FilterDimension::ProductType,
    ];

    /// The product field this dimension constrains.
    pub fn value_of<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            FilterDimension::Brand => &product.brand,
            FilterDimension::Color => &product.color,
            FilterDimension::ProductType => &product.product_type,
        }
    }
}

/// Active filter values per dimension. An empty set imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub brands: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub product_types: BTreeSet<String>,
}

impl FilterState {
    pub fn values(&self, dimension: FilterDimension) -> &BTreeSet<String> {
        match dimension {
            FilterDimension::Brand => &self.brands,
            FilterDimension::Color => &self.colors,
            FilterDimension::ProductType => &self.product_types,
        }
    }

    fn values_mut(&mut self, dimension: FilterDimension) -> &mut BTreeSet<String> {
        match dimension {
            FilterDimension::Brand => &mut self.brands,
            FilterDimension::Color => &mut self.colors,
            FilterDimension::ProductType => &mut self.product_types,
        }
    }

    /// Symmetric difference: remove `value` if active, add it otherwise.
    pub fn toggle(&mut self, dimension: FilterDimension, value: impl Into<String>) {
        let value = value.into();
        let set = self.values_mut(dimension);
        if !set.remove(&value) {
            set.insert(value);
        }
    }

    pub fn is_active(&self, dimension: FilterDimension, value: &str) -> bool {
        self.values(dimension).contains(value)
    }

    /// Every dimension must accept the product.
    pub fn accepts(&self, product: &Product) -> bool {
        FilterDimension::ALL.iter().all(|dimension| {
            let active = self.values(*dimension);
            active.is_empty() || active.contains(dimension.value_of(product))
        })
    }

    pub fn active_count(&self) -> usize {
        self.brands.len() + self.colors.len() + self.product_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn clear(&mut self) {
        self.brands.clear();
        self.colors.clear();
        self.product_types.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;

    fn product(brand: &str, color: &str, kind: &str) -> Product {
        Product::new("item", brand, color, kind, Price::zero())
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut filters = FilterState::default();
        filters.toggle(FilterDimension::Brand, "Nike");
        assert!(filters.is_active(FilterDimension::Brand, "Nike"));

        filters.toggle(FilterDimension::Brand, "Nike");
        assert!(!filters.is_active(FilterDimension::Brand, "Nike"));
        assert!(filters.is_empty());
    }

    #[test]
    fn toggle_only_touches_one_dimension() {
        let mut filters = FilterState::default();
        filters.toggle(FilterDimension::Color, "Red");
        assert!(filters.brands.is_empty());
        assert!(filters.product_types.is_empty());
        assert_eq!(filters.active_count(), 1);
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filters = FilterState::default();
        assert!(filters.accepts(&product("Nike", "Red", "Shoes")));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let mut filters = FilterState::default();
        filters.toggle(FilterDimension::Brand, "Nike");
        filters.toggle(FilterDimension::Color, "Red");

        assert!(filters.accepts(&product("Nike", "Red", "Shoes")));
        assert!(!filters.accepts(&product("Nike", "Blue", "Shoes")));
        assert!(!filters.accepts(&product("Adidas", "Red", "Shoes")));
    }

    #[test]
    fn values_within_a_dimension_combine_with_or() {
        let mut filters = FilterState::default();
        filters.toggle(FilterDimension::ProductType, "Shoes");
        filters.toggle(FilterDimension::ProductType, "Shirt");

        assert!(filters.accepts(&product("Nike", "Red", "Shoes")));
        assert!(filters.accepts(&product("Nike", "Red", "Shirt")));
        assert!(!filters.accepts(&product("Nike", "Red", "Jacket")));
    }
}
