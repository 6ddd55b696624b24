//! Custom field catalog and matrix option selections.
//!
//! A matrix parent declares its option axes as multi-select custom fields
//! on the *full* form of the record; the searched-list form does not carry
//! them. A matrix child only stores `(type id, value id)` pairs, which are
//! meaningless until matched against the parent's declared catalog.

use serde::{Deserialize, Serialize};

use crate::ids::{OptionTypeId, OptionValueId};

/// Classification of a custom field ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomFieldKind {
    /// Multi-select field. Every multi-select custom field on an item is
    /// treated as a product option axis.
    MultiSelect,
    /// Single-select field.
    Select,
    /// Free-form text field.
    Text,
    /// Any other SDK field ref type.
    #[default]
    #[serde(other)]
    Other,
}

impl CustomFieldKind {
    /// Classify an SDK field ref type name (e.g. "MultiSelectCustomFieldRef").
    pub fn from_ref_type(s: &str) -> Self {
        match s {
            "MultiSelectCustomFieldRef" => CustomFieldKind::MultiSelect,
            "SelectCustomFieldRef" => CustomFieldKind::Select,
            "StringCustomFieldRef" | "LongTextCustomFieldRef" => CustomFieldKind::Text,
            _ => CustomFieldKind::Other,
        }
    }
}

/// A declared option value inside a multi-select custom field.
///
/// The embedded type id ties the value back to the option axis it
/// belongs to; the internal id is what child selections reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionValueEntry {
    /// Id of the custom record type this value belongs to.
    pub type_id: OptionTypeId,
    /// Internal id of the declared value.
    pub internal_id: OptionValueId,
    /// Display name (e.g. "Small", "Black").
    pub name: String,
}

impl OptionValueEntry {
    pub fn new(
        type_id: impl Into<OptionTypeId>,
        internal_id: impl Into<OptionValueId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            type_id: type_id.into(),
            internal_id: internal_id.into(),
            name: name.into(),
        }
    }
}

/// One custom field on a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    /// Script id of the field, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    /// Field classification.
    pub kind: CustomFieldKind,
    /// Declared values (multi-select fields only).
    #[serde(default)]
    pub values: Vec<OptionValueEntry>,
}

impl CustomField {
    /// A multi-select field with the given declared values.
    pub fn multi_select(values: Vec<OptionValueEntry>) -> Self {
        Self {
            script_id: None,
            kind: CustomFieldKind::MultiSelect,
            values,
        }
    }
}

/// The custom field catalog of a record's full form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldList {
    #[serde(default)]
    pub fields: Vec<CustomField>,
}

impl CustomFieldList {
    pub fn new(fields: Vec<CustomField>) -> Self {
        Self { fields }
    }

    /// All multi-select fields, i.e. the declared option axes.
    pub fn multi_select_fields(&self) -> impl Iterator<Item = &CustomField> {
        self.fields
            .iter()
            .filter(|f| f.kind == CustomFieldKind::MultiSelect)
    }

    /// Find the declared value matching a child's `(type id, value id)`
    /// selection across all multi-select fields.
    pub fn find_option_value(
        &self,
        type_id: &OptionTypeId,
        value_id: &OptionValueId,
    ) -> Option<&OptionValueEntry> {
        self.multi_select_fields()
            .flat_map(|f| f.values.iter())
            .find(|v| &v.type_id == type_id && &v.internal_id == value_id)
    }
}

/// A child record's reference to one of its parent's option axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSelection {
    /// Custom record type id of the option axis (e.g. "size").
    pub type_id: OptionTypeId,
    /// Internal id of the selected value.
    pub value_id: OptionValueId,
}

impl OptionSelection {
    pub fn new(type_id: impl Into<OptionTypeId>, value_id: impl Into<OptionValueId>) -> Self {
        Self {
            type_id: type_id.into(),
            value_id: value_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CustomFieldList {
        CustomFieldList::new(vec![
            CustomField {
                script_id: Some("custitem_color".into()),
                kind: CustomFieldKind::Text,
                values: Vec::new(),
            },
            CustomField::multi_select(vec![
                OptionValueEntry::new("5", "12", "Small"),
                OptionValueEntry::new("5", "13", "Large"),
            ]),
            CustomField::multi_select(vec![OptionValueEntry::new("7", "2", "Black")]),
        ])
    }

    #[test]
    fn test_kind_from_ref_type() {
        assert_eq!(
            CustomFieldKind::from_ref_type("MultiSelectCustomFieldRef"),
            CustomFieldKind::MultiSelect
        );
        assert_eq!(
            CustomFieldKind::from_ref_type("BooleanCustomFieldRef"),
            CustomFieldKind::Other
        );
    }

    #[test]
    fn test_multi_select_fields_skips_other_kinds() {
        assert_eq!(catalog().multi_select_fields().count(), 2);
    }

    #[test]
    fn test_find_option_value_matches_both_ids() {
        let list = catalog();
        let entry = list
            .find_option_value(&OptionTypeId::new("5"), &OptionValueId::new("12"))
            .unwrap();
        assert_eq!(entry.name, "Small");

        // Matching type id with a value id declared under another axis
        // is not a match.
        assert!(list
            .find_option_value(&OptionTypeId::new("5"), &OptionValueId::new("2"))
            .is_none());
    }

    #[test]
    fn test_find_option_value_searches_every_axis() {
        let list = catalog();
        let entry = list
            .find_option_value(&OptionTypeId::new("7"), &OptionValueId::new("2"))
            .unwrap();
        assert_eq!(entry.name, "Black");
    }
}
