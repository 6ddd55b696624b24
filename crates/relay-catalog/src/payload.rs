//! Storefront payload types.
//!
//! The downstream endpoint consumes a list of envelopes, each wrapping a
//! product (optionally with variants) or a stock level. Prices travel as
//! numeric strings or null; timestamps as ISO-8601 UTC.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A resolved option on a variant, e.g. Size: Small.
///
/// Serializes as a single-entry map, `{"Size": "Small"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption {
    /// Option axis name (e.g. "Size").
    pub name: String,
    /// Selected value (e.g. "Small").
    pub value: String,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Serialize for VariantOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// One variant of a matrix product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantPayload {
    /// Variant price; the child's own price, or the parent's when the
    /// child has none.
    pub price: Option<String>,
    /// Variant SKU.
    pub sku: String,
    /// Resolved options, in the child's declared order.
    pub options: Vec<VariantOption>,
}

/// A product as the storefront expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    /// Display name.
    pub name: String,
    /// Availability timestamp (the record's last-modified, UTC).
    pub available_on: DateTime<Utc>,
    /// Sales description.
    pub description: Option<String>,
    /// SKU.
    pub sku: String,
    /// Base price as a numeric string.
    pub price: Option<String>,
    /// Cost price as a numeric string.
    pub cost_price: Option<String>,
    /// Source-system tag.
    pub channel: String,
    /// Variants, present only for matrix products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantPayload>>,
}

/// The product envelope consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductMessage {
    pub product: ProductPayload,
}

impl ProductMessage {
    pub fn new(product: ProductPayload) -> Self {
        Self { product }
    }

    /// Whether this message carries variants.
    pub fn has_variants(&self) -> bool {
        self.product.variants.is_some()
    }
}

/// Stock level for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockMessage {
    pub sku: String,
    pub quantity: f64,
}
