use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::collation;
use super::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Brand,
    Color,
    Type,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active ordering of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Brand,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Same key flips the direction; a different key starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Asc,
            }
        }
    }

    /// Comparison with the direction applied. Equal keys stay `Equal` in
    /// both directions so a stable sort keeps collection order for ties.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.key {
            SortKey::Brand => collation::compare(&a.brand, &b.brand),
            SortKey::Color => collation::compare(&a.color, &b.color),
            SortKey::Type => collation::compare(&a.product_type, &b.product_type),
            SortKey::Price => a.price.cmp_amount(&b.price),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}
