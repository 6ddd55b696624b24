//! Record builders for tests and fixtures.

use chrono::{TimeZone, Utc};

use crate::custom_field::CustomFieldList;
use crate::ids::InternalId;
use crate::pricing::PricingMatrix;
use crate::record::{InventoryRecord, MatrixType, ParentRef};

/// A minimal record with a fixed timestamp.
pub fn record(internal_id: &str, item_id: &str, matrix_type: MatrixType) -> InventoryRecord {
    InventoryRecord {
        internal_id: InternalId::new(internal_id),
        item_id: item_id.to_string(),
        store_display_name: None,
        sales_description: None,
        upc_code: format!("upc-{item_id}"),
        last_modified: Utc.with_ymd_and_hms(2014, 3, 12, 10, 0, 0).unwrap(),
        cost_estimate: None,
        quantity_available: None,
        matrix_type,
        parent: None,
        pricing_matrix: PricingMatrix::default(),
        options: Vec::new(),
        custom_fields: CustomFieldList::default(),
    }
}

/// A matrix child pointing at the given parent.
pub fn child_of(internal_id: &str, item_id: &str, parent_id: &str) -> InventoryRecord {
    let mut rec = record(internal_id, item_id, MatrixType::Child);
    rec.parent = Some(ParentRef::new(parent_id));
    rec
}
