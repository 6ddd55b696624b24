//! Per-run lookup caches.
//!
//! One cache object lives for exactly one mapping run and is passed by
//! reference into the pipeline, so concurrent runs never share state.
//! Entries are populated lazily on first access and never invalidated
//! within the run.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use relay_netsuite::{InternalId, InventoryRecord, OptionTypeId, RecordSource, SourceError};
use tracing::debug;

/// Caches for one mapping run: full parent records and option-type names.
#[derive(Debug, Default)]
pub struct RunCache {
    parents: HashMap<InternalId, InventoryRecord>,
    option_type_names: HashMap<OptionTypeId, String>,
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full form of a parent record, fetched on first access.
    ///
    /// Children sharing a parent hit the cache, so each distinct parent
    /// id costs exactly one point lookup per run.
    pub fn parent<S: RecordSource>(
        &mut self,
        source: &S,
        id: &InternalId,
    ) -> Result<&InventoryRecord, SourceError> {
        match self.parents.entry(id.clone()) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                debug!(parent_id = %id, "fetching full parent record");
                Ok(slot.insert(source.get_by_id(id)?))
            }
        }
    }

    /// Display name of an option axis, fetched on first access.
    pub fn option_type_name<S: RecordSource>(
        &mut self,
        source: &S,
        id: &OptionTypeId,
    ) -> Result<String, SourceError> {
        match self.option_type_names.entry(id.clone()) {
            Entry::Occupied(slot) => Ok(slot.get().clone()),
            Entry::Vacant(slot) => {
                debug!(type_id = %id, "fetching custom record type");
                let record_type = source.get_custom_record_type(id)?;
                Ok(slot.insert(record_type.record_name).clone())
            }
        }
    }
}
