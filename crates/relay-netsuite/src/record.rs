//! Inventory item records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::custom_field::{CustomFieldList, OptionSelection};
use crate::ids::InternalId;
use crate::pricing::PricingMatrix;

/// Matrix classification of an inventory record.
///
/// Derived at ingestion from the source record's matrix-type tag; the
/// wire form uses `"_parent"` / `"_child"`, with the tag absent or empty
/// on standalone items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatrixType {
    /// A standalone item, neither parent nor child.
    #[default]
    None,
    /// A matrix parent: declares option axes, owns no selections.
    Parent,
    /// A matrix child: one concrete combination of the parent's options.
    Child,
}

impl MatrixType {
    /// Classify the raw wire tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "_parent" => MatrixType::Parent,
            "_child" => MatrixType::Child,
            _ => MatrixType::None,
        }
    }

    /// The raw wire tag for this classification.
    pub fn as_tag(&self) -> &'static str {
        match self {
            MatrixType::None => "",
            MatrixType::Parent => "_parent",
            MatrixType::Child => "_child",
        }
    }

    pub fn is_matrix(&self) -> bool {
        !matches!(self, MatrixType::None)
    }
}

/// A child record's reference to its matrix parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub internal_id: InternalId,
}

impl ParentRef {
    pub fn new(internal_id: impl Into<InternalId>) -> Self {
        Self {
            internal_id: internal_id.into(),
        }
    }
}

/// One inventory item record as returned by the record source.
///
/// Immutable for the duration of a mapping run. The searched-list form
/// omits `custom_fields`; only a point lookup returns the full catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Internal record id.
    pub internal_id: InternalId,
    /// Item id (the primary item code).
    pub item_id: String,
    /// Storefront display name, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_display_name: Option<String>,
    /// Sales description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_description: Option<String>,
    /// UPC code, used as the SKU downstream.
    pub upc_code: String,
    /// Last-modified timestamp (UTC).
    pub last_modified: DateTime<Utc>,
    /// Cost estimate as a numeric string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<String>,
    /// Quantity available across locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_available: Option<f64>,
    /// Matrix classification.
    #[serde(default)]
    pub matrix_type: MatrixType,
    /// Parent reference, present only on matrix children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    /// Multi-currency pricing matrix.
    #[serde(default)]
    pub pricing_matrix: PricingMatrix,
    /// Matrix option selections, in declared order (children only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSelection>,
    /// Custom field catalog (full form only).
    #[serde(default)]
    pub custom_fields: CustomFieldList,
}

impl InventoryRecord {
    /// Display name with fallback to the item id.
    pub fn display_name(&self) -> &str {
        self.store_display_name.as_deref().unwrap_or(&self.item_id)
    }

    /// The parent internal id, for matrix children that carry one.
    pub fn parent_id(&self) -> Option<&InternalId> {
        self.parent.as_ref().map(|p| &p.internal_id)
    }
}

/// A custom record type, the target of option-name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRecordType {
    /// Declared name of the record type (e.g. "Size").
    pub record_name: String,
}

impl CustomRecordType {
    pub fn new(record_name: impl Into<String>) -> Self {
        Self {
            record_name: record_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: Option<&str>) -> InventoryRecord {
        InventoryRecord {
            internal_id: InternalId::new("100"),
            item_id: "WIDGET-1".into(),
            store_display_name: name.map(str::to_string),
            sales_description: None,
            upc_code: "0001".into(),
            last_modified: Utc.with_ymd_and_hms(2014, 3, 12, 10, 0, 0).unwrap(),
            cost_estimate: None,
            quantity_available: None,
            matrix_type: MatrixType::None,
            parent: None,
            pricing_matrix: PricingMatrix::default(),
            options: Vec::new(),
            custom_fields: CustomFieldList::default(),
        }
    }

    #[test]
    fn test_matrix_type_from_tag() {
        assert_eq!(MatrixType::from_tag("_parent"), MatrixType::Parent);
        assert_eq!(MatrixType::from_tag("_child"), MatrixType::Child);
        assert_eq!(MatrixType::from_tag(""), MatrixType::None);
        assert_eq!(MatrixType::from_tag("garbage"), MatrixType::None);
    }

    #[test]
    fn test_matrix_type_roundtrip_tags() {
        for ty in [MatrixType::None, MatrixType::Parent, MatrixType::Child] {
            assert_eq!(MatrixType::from_tag(ty.as_tag()), ty);
        }
    }

    #[test]
    fn test_display_name_falls_back_to_item_id() {
        assert_eq!(record(Some("Widget")).display_name(), "Widget");
        assert_eq!(record(None).display_name(), "WIDGET-1");
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let rec: InventoryRecord = serde_json::from_value(serde_json::json!({
            "internal_id": "42",
            "item_id": "SHIRT",
            "upc_code": "1100",
            "last_modified": "2014-03-12T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(rec.matrix_type, MatrixType::None);
        assert!(rec.pricing_matrix.is_empty());
        assert!(rec.parent.is_none());
    }
}
