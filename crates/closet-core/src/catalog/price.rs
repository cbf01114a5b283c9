//! Price normalization.
//!
//! Catalog prices arrive either as JSON numbers or as free-form strings
//! (`"$45.00"`, `"N/A"`). They are reduced to a decimal amount once, when a
//! product enters the catalog, so sorting never has to coerce types.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price exactly as it appears in the product feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

/// Normalized product price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount used for ordering. Malformed input normalizes to zero.
    pub amount: Decimal,
    /// Label shown to the user.
    pub display: String,
}

impl Price {
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            display: String::new(),
        }
    }

    /// Normalize an optional raw price. A missing price is zero.
    pub fn normalize(raw: Option<&RawPrice>) -> Self {
        match raw {
            Some(RawPrice::Number(value)) => Self::from_number(*value),
            Some(RawPrice::Text(text)) => Self::from_text(text),
            None => Self::zero(),
        }
    }

    pub fn from_number(value: f64) -> Self {
        let amount = Decimal::from_f64(value).unwrap_or(Decimal::ZERO);
        let display = if value.is_finite() {
            format!("${:.2}", value)
        } else {
            String::new()
        };
        Self { amount, display }
    }

    /// Strip every character that is not a digit or `.`, then read the
    /// leading `digits[.digits]` run. Anything unreadable is zero.
    pub fn from_text(text: &str) -> Self {
        Self {
            amount: parse_amount(text),
            display: text.to_string(),
        }
    }

    pub fn cmp_amount(&self, other: &Self) -> Ordering {
        self.amount.cmp(&other.amount)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

fn parse_amount(text: &str) -> Decimal {
    let stripped: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut seen_dot = false;
    let mut end = 0;
    for (idx, c) in stripped.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + c.len_utf8();
    }

    let number = stripped[..end].trim_end_matches('.');
    if number.is_empty() {
        return Decimal::ZERO;
    }

    // Decimal::from_str rejects a bare leading dot
    let candidate = if number.starts_with('.') {
        format!("0{number}")
    } else {
        number.to_string()
    };

    Decimal::from_str(&candidate).unwrap_or(Decimal::ZERO)
}
