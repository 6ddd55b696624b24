//! NetSuite pricing matrix types.
//!
//! The pricing matrix arrives as a list of per-currency, per-price-level
//! entries. Each entry's price list holds either a single price or a list
//! of quantity-break tiers, so the wire shape varies between an object and
//! an array. That variability is closed off here as [`PriceList`] at
//! ingestion time rather than inspected ad hoc at each use site.

use serde::{Deserialize, Serialize};

/// A single price point with an optional quantity break.
///
/// Values are numeric strings as delivered by the SOAP wire format
/// (e.g. `"9.99"`, quantity `"0.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Price value as a numeric string.
    pub value: String,
    /// Quantity threshold at which this tier applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

impl PriceTier {
    /// Create a tier with no quantity break.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quantity: None,
        }
    }

    /// Create a tier with a quantity break.
    pub fn with_quantity(value: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quantity: Some(quantity.into()),
        }
    }
}

/// The price field of a pricing entry: a single price or a tier list.
///
/// When multiple tiers exist, the first tier in list order is the
/// base/no-discount tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceList {
    /// Quantity-break pricing tiers.
    Tiered(Vec<PriceTier>),
    /// A single price point.
    SingleTier(PriceTier),
}

impl PriceList {
    /// The base tier: the single price, or the first tier in list order.
    pub fn base_tier(&self) -> Option<&PriceTier> {
        match self {
            PriceList::Tiered(tiers) => tiers.first(),
            PriceList::SingleTier(tier) => Some(tier),
        }
    }
}

/// A named record reference, e.g. a currency or price level label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Display name (e.g. "USA", "Base Price").
    pub name: String,
    /// Internal id of the referenced record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_id: Option<String>,
}

impl NamedRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            internal_id: None,
        }
    }
}

/// One currency/price-level entry of the pricing matrix.
///
/// A missing `price_list` is a valid state, not an error; callers treat
/// it as "no price available".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Currency label for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<NamedRef>,
    /// Price level label (e.g. "Base Price", "Online Wholesale Price").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<NamedRef>,
    /// The price(s) for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_list: Option<PriceList>,
}

impl PriceEntry {
    /// Entry with a single price and no labels.
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            currency: None,
            price_level: None,
            price_list: Some(PriceList::SingleTier(PriceTier::new(value))),
        }
    }

    /// Entry with quantity-break tiers and no labels.
    pub fn tiered(tiers: Vec<PriceTier>) -> Self {
        Self {
            currency: None,
            price_level: None,
            price_list: Some(PriceList::Tiered(tiers)),
        }
    }
}

/// The full pricing matrix of an inventory record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingMatrix {
    /// Entries in source order. The first entry is the one the base
    /// price is read from.
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

impl PricingMatrix {
    /// Matrix with a single entry.
    pub fn of(entry: PriceEntry) -> Self {
        Self {
            prices: vec![entry],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tier_single() {
        let list = PriceList::SingleTier(PriceTier::new("9.99"));
        assert_eq!(list.base_tier().map(|t| t.value.as_str()), Some("9.99"));
    }

    #[test]
    fn test_base_tier_is_first_in_list_order() {
        let list = PriceList::Tiered(vec![
            PriceTier::with_quantity("84.0", "10.0"),
            PriceTier::with_quantity("79.0", "100.0"),
        ]);
        assert_eq!(list.base_tier().map(|t| t.value.as_str()), Some("84.0"));
    }

    #[test]
    fn test_deserialize_single_price_object() {
        let entry: PriceEntry = serde_json::from_value(serde_json::json!({
            "currency": { "name": "USA", "internal_id": "1" },
            "price_level": { "name": "Base Price", "internal_id": "1" },
            "price_list": { "value": "9.99", "quantity": "0.0" }
        }))
        .unwrap();

        assert_eq!(
            entry.price_list,
            Some(PriceList::SingleTier(PriceTier::with_quantity(
                "9.99", "0.0"
            )))
        );
    }

    #[test]
    fn test_deserialize_tiered_price_array() {
        let entry: PriceEntry = serde_json::from_value(serde_json::json!({
            "currency": { "name": "Euro", "internal_id": "4" },
            "price_level": { "name": "Base Price", "internal_id": "1" },
            "price_list": [
                { "value": "89.0", "quantity": "0.0" },
                { "value": "84.0", "quantity": "10.0" },
                { "value": "79.0", "quantity": "100.0" }
            ]
        }))
        .unwrap();

        let Some(PriceList::Tiered(tiers)) = entry.price_list else {
            panic!("expected tiered price list");
        };
        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers[0].value, "89.0");
    }

    #[test]
    fn test_deserialize_entry_without_price_list() {
        let entry: PriceEntry = serde_json::from_value(serde_json::json!({
            "currency": { "name": "USA" }
        }))
        .unwrap();

        assert!(entry.price_list.is_none());
    }
}
