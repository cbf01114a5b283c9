use serde::{Deserialize, Serialize};

use super::price::{Price, RawPrice};

/// Product record as stored in the bundled catalog feed.
///
/// Only `product_name` is expected to always be present; every other
/// field tolerates absence so a sparse record still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub product_name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub price: Option<RawPrice>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub style_code: Option<String>,
    #[serde(default)]
    pub brand_key: Option<String>,
    #[serde(default)]
    pub product_url: String,
    #[serde(default)]
    pub editor_note: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub variant_id: Option<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub fabric: Option<String>,
    #[serde(default)]
    pub fit: Option<String>,
}

/// Immutable catalog record.
///
/// `name` is not unique: two records may share it and are told apart by
/// their position in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub brand: String,
    pub size: String,
    pub color: String,
    pub price: Price,
    pub quantity: u32,
    pub style_code: Option<String>,
    pub brand_key: Option<String>,
    pub product_url: String,
    pub editor_note: Option<String>,
    pub currency: Option<String>,
    pub variant_id: Option<String>,
    pub image_url: String,
    pub description: String,
    pub product_type: String,
    pub fabric: Option<String>,
    pub fit: Option<String>,
}

impl Product {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(
        name: impl Into<String>,
        brand: impl Into<String>,
        color: impl Into<String>,
        product_type: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            name: name.into(),
            brand: brand.into(),
            size: String::new(),
            color: color.into(),
            price,
            quantity: 1,
            style_code: None,
            brand_key: None,
            product_url: String::new(),
            editor_note: None,
            currency: None,
            variant_id: None,
            image_url: String::new(),
            description: String::new(),
            product_type: product_type.into(),
            fabric: None,
            fit: None,
        }
    }

    /// Case-insensitive substring match over name, brand, color and type.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        [&self.name, &self.brand, &self.color, &self.product_type]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let price = Price::normalize(raw.price.as_ref());
        Self {
            name: raw.product_name,
            brand: raw.brand,
            size: raw.size,
            color: raw.color,
            price,
            quantity: raw.quantity,
            style_code: raw.style_code.filter(|code| !code.is_empty()),
            brand_key: raw.brand_key,
            product_url: raw.product_url,
            editor_note: raw.editor_note,
            currency: raw.currency,
            variant_id: raw.variant_id,
            image_url: raw.image_url,
            description: raw.product_description,
            product_type: raw.product_type,
            fabric: raw.fabric,
            fit: raw.fit,
        }
    }
}
