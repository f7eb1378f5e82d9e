//! Catalog product records.

use serde::{Deserialize, Serialize};
use storefront_core::{Money, ProductId, money};

/// Catalog label attached to a product by the merchandising side.
///
/// Distinct from the per-render recommendation flag, which always takes
/// display priority over any badge carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Badge {
    Popular,
    BestValue,
}

impl Badge {
    /// Text shown inside the badge element.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Popular => "Most Popular",
            Badge::BestValue => "Best Value",
        }
    }

    /// Lowercase class token for styling hooks.
    pub fn css_class(&self) -> &'static str {
        match self {
            Badge::Popular => "popular",
            Badge::BestValue => "best-value",
        }
    }
}

/// One product offering as supplied by the external catalog.
///
/// Read-only to the rendering core. `base_price` is the pre-discount
/// reference price in minor units of `price`'s currency; when present it
/// should be ≥ the price amount, but a violating record still renders (the
/// savings figure just stops being meaningful).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub tagline: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(
        default,
        with = "money::decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_price: Option<u64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_url: Option<String>,
}
