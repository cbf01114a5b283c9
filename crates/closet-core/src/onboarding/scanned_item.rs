use serde::{Deserialize, Serialize};

use crate::ids::ScannedItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Tops,
    Bottoms,
    Shoes,
    Accessories,
}

impl ItemCategory {
    /// Review screen grouping order.
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::Tops,
        ItemCategory::Bottoms,
        ItemCategory::Shoes,
        ItemCategory::Accessories,
    ];
}

/// Clothing item extracted from a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedItem {
    pub id: ScannedItemId,
    pub name: String,
    pub brand: String,
    pub category: ItemCategory,
    pub image: String,
    pub selected: bool,
}

impl ScannedItem {
    pub fn new(
        id: impl Into<ScannedItemId>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category,
            image: PLACEHOLDER_IMAGE.to_string(),
            selected: true,
        }
    }
}

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// The receipt scan is simulated; every wizard starts from these eight
/// items, all selected.
pub fn demo_scanned_items() -> Vec<ScannedItem> {
    vec![
        ScannedItem::new("1", "Cotton Oxford Shirt", "J.Crew", ItemCategory::Tops),
        ScannedItem::new("2", "Slim Fit Chinos", "Bonobos", ItemCategory::Bottoms),
        ScannedItem::new("3", "Wool Sweater", "Everlane", ItemCategory::Tops),
        ScannedItem::new("4", "Leather Sneakers", "Common Projects", ItemCategory::Shoes),
        ScannedItem::new("5", "Denim Jacket", "Levi's", ItemCategory::Tops),
        ScannedItem::new("6", "Canvas Belt", "Anderson's", ItemCategory::Accessories),
        ScannedItem::new("7", "Running Shorts", "Nike", ItemCategory::Bottoms),
        ScannedItem::new("8", "Suede Loafers", "Cole Haan", ItemCategory::Shoes),
    ]
}
