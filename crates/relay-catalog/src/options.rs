//! Option resolution.
//!
//! A child's `(type id, value id)` selection resolves into a
//! human-readable name/value pair via two lookups: the value name from
//! the parent's full-form custom field catalog, and the axis name from
//! the custom record type. Both go through the run cache.

use relay_netsuite::custom_field::OptionSelection;
use relay_netsuite::{InventoryRecord, RecordSource};

use crate::cache::RunCache;
use crate::error::CatalogError;
use crate::payload::VariantOption;

/// Resolves option selections against a parent's declared catalog.
pub struct OptionResolver<'a, S: RecordSource> {
    source: &'a S,
    cache: &'a mut RunCache,
}

impl<'a, S: RecordSource> OptionResolver<'a, S> {
    pub fn new(source: &'a S, cache: &'a mut RunCache) -> Self {
        Self { source, cache }
    }

    /// Resolve one selection into its name/value pair.
    pub fn resolve(
        &mut self,
        selection: &OptionSelection,
        parent: &InventoryRecord,
    ) -> Result<VariantOption, CatalogError> {
        let value = self.value_of(selection, parent)?;
        let name = self
            .cache
            .option_type_name(self.source, &selection.type_id)?;
        Ok(VariantOption { name, value })
    }

    /// The declared display name of the selected value.
    ///
    /// The searched-list form of the parent does not carry the custom
    /// field catalog, so this always goes through the full form held in
    /// the run cache. A selection with no match in any multi-select field
    /// is a hard error: the catalog is stale or the option was retracted.
    fn value_of(
        &mut self,
        selection: &OptionSelection,
        parent: &InventoryRecord,
    ) -> Result<String, CatalogError> {
        let full = self.cache.parent(self.source, &parent.internal_id)?;
        full.custom_fields
            .find_option_value(&selection.type_id, &selection.value_id)
            .map(|entry| entry.name.clone())
            .ok_or_else(|| CatalogError::OptionValueNotFound {
                type_id: selection.type_id.clone(),
                value_id: selection.value_id.clone(),
                parent_id: parent.internal_id.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_netsuite::custom_field::{CustomField, CustomFieldList, OptionValueEntry};
    use relay_netsuite::memory::MemorySource;
    use relay_netsuite::record::MatrixType;
    use relay_netsuite::testing;

    fn source_with_parent() -> MemorySource {
        let mut parent = testing::record("10", "SHIRT", MatrixType::Parent);
        parent.custom_fields = CustomFieldList::new(vec![CustomField::multi_select(vec![
            OptionValueEntry::new("5", "12", "Small"),
            OptionValueEntry::new("5", "13", "Large"),
        ])]);

        MemorySource::new(vec![testing::record("10", "SHIRT", MatrixType::Parent)])
            .with_detail(parent)
            .with_record_type("5", "Size")
    }

    #[test]
    fn test_resolves_name_and_value() {
        let source = source_with_parent();
        let mut cache = RunCache::new();
        let mut resolver = OptionResolver::new(&source, &mut cache);

        let parent = testing::record("10", "SHIRT", MatrixType::Parent);
        let option = resolver
            .resolve(&OptionSelection::new("5", "12"), &parent)
            .unwrap();

        assert_eq!(option, VariantOption::new("Size", "Small"));
    }

    #[test]
    fn test_unmatched_selection_is_a_hard_error() {
        let source = source_with_parent();
        let mut cache = RunCache::new();
        let mut resolver = OptionResolver::new(&source, &mut cache);

        let parent = testing::record("10", "SHIRT", MatrixType::Parent);
        let result = resolver.resolve(&OptionSelection::new("5", "99"), &parent);

        assert!(matches!(
            result,
            Err(CatalogError::OptionValueNotFound { .. })
        ));
    }

    #[test]
    fn test_value_lookup_uses_full_form_not_search_form() {
        // The search-form parent passed in carries no custom fields;
        // resolution must still succeed via the point lookup.
        let source = source_with_parent();
        let mut cache = RunCache::new();
        let mut resolver = OptionResolver::new(&source, &mut cache);

        let search_form = testing::record("10", "SHIRT", MatrixType::Parent);
        assert!(search_form.custom_fields.fields.is_empty());

        let option = resolver
            .resolve(&OptionSelection::new("5", "13"), &search_form)
            .unwrap();
        assert_eq!(option.value, "Large");
    }
}
