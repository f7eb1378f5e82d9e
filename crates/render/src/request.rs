//! Render request decoding.
//!
//! The host signal resolves with a loosely-typed payload. Anything that
//! deviates from the expected shape decodes to the empty request; the
//! renderer then shows an empty container instead of failing.

use serde::Deserialize;
use serde_json::Value;
use storefront_core::ProductId;
use tracing::debug;

/// What the host asked the renderer to show.
///
/// `product_ids` order is display order; duplicates render duplicate
/// cards. At most one card per render is marked recommended, matched by
/// equality against each entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    #[serde(default)]
    pub recommended_product_id: Option<ProductId>,
}

impl RenderRequest {
    /// The request that renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a request for a fixed identifier list with no recommendation.
    pub fn for_ids(product_ids: Vec<ProductId>) -> Self {
        Self {
            product_ids,
            recommended_product_id: None,
        }
    }

    /// Decode a wire payload, tolerating malformed shapes.
    ///
    /// A payload that is not an object, lacks `productIds`, or whose
    /// `productIds` is not an array decodes to [`RenderRequest::empty`].
    /// Non-string (or empty-string) entries are skipped individually.
    pub fn from_payload(payload: &Value) -> Self {
        let Some(ids) = payload.get("productIds").and_then(Value::as_array) else {
            debug!("payload missing productIds array, treating as empty request");
            return Self::empty();
        };

        let product_ids = ids
            .iter()
            .filter_map(|entry| {
                let slug = entry.as_str()?;
                ProductId::new(slug).ok()
            })
            .collect();

        let recommended_product_id = payload
            .get("recommendedProductId")
            .and_then(Value::as_str)
            .and_then(|slug| ProductId::new(slug).ok());

        Self {
            product_ids,
            recommended_product_id,
        }
    }

    pub fn is_recommended(&self, id: &ProductId) -> bool {
        self.recommended_product_id.as_ref() == Some(id)
    }
}
