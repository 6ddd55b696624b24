//! In-memory record source backed by a fixture.
//!
//! Serves two jobs: fixture-driven runs from the CLI, and a countable
//! stand-in for the remote source in tests. Point lookups are counted so
//! cache behavior (one fetch per distinct parent) is observable.

use std::cell::Cell;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{InternalId, OptionTypeId};
use crate::record::{CustomRecordType, InventoryRecord};
use crate::source::{RecordSource, SourceError};

/// Deserializable fixture for a [`MemorySource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixture {
    /// Searched-list records, in source order.
    #[serde(default)]
    pub records: Vec<InventoryRecord>,
    /// Full-form records served by point lookup. A record missing here
    /// falls back to its searched-list form.
    #[serde(default)]
    pub details: Vec<InventoryRecord>,
    /// Custom record types by id.
    #[serde(default)]
    pub record_types: HashMap<OptionTypeId, String>,
}

/// In-memory [`RecordSource`].
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<InventoryRecord>,
    details: HashMap<InternalId, InventoryRecord>,
    record_types: HashMap<OptionTypeId, CustomRecordType>,
    get_calls: Cell<u64>,
    type_calls: Cell<u64>,
}

impl MemorySource {
    /// Source over searched-list records only.
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Register the full form of a record, served by `get_by_id`.
    pub fn with_detail(mut self, record: InventoryRecord) -> Self {
        self.details.insert(record.internal_id.clone(), record);
        self
    }

    /// Register a custom record type.
    pub fn with_record_type(mut self, id: impl Into<OptionTypeId>, name: impl Into<String>) -> Self {
        self.record_types
            .insert(id.into(), CustomRecordType::new(name));
        self
    }

    /// Build a source from a deserialized fixture.
    pub fn from_fixture(fixture: Fixture) -> Self {
        let mut source = Self::new(fixture.records);
        for detail in fixture.details {
            source = source.with_detail(detail);
        }
        for (id, name) in fixture.record_types {
            source = source.with_record_type(id, name);
        }
        source
    }

    /// Number of `get_by_id` point lookups performed so far.
    pub fn get_calls(&self) -> u64 {
        self.get_calls.get()
    }

    /// Number of `get_custom_record_type` lookups performed so far.
    pub fn type_calls(&self) -> u64 {
        self.type_calls.get()
    }
}

impl RecordSource for MemorySource {
    fn fetch_latest(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<InventoryRecord>, SourceError> {
        let records: Vec<InventoryRecord> = self
            .records
            .iter()
            .filter(|r| since.map_or(true, |s| r.last_modified > s))
            .cloned()
            .collect();
        tracing::debug!(count = records.len(), "serving fixture records");
        Ok(records)
    }

    fn get_by_id(&self, id: &InternalId) -> Result<InventoryRecord, SourceError> {
        self.get_calls.set(self.get_calls.get() + 1);
        self.details
            .get(id)
            .or_else(|| self.records.iter().find(|r| &r.internal_id == id))
            .cloned()
            .ok_or_else(|| SourceError::RecordNotFound(id.clone()))
    }

    fn get_custom_record_type(
        &self,
        id: &OptionTypeId,
    ) -> Result<CustomRecordType, SourceError> {
        self.type_calls.set(self.type_calls.get() + 1);
        self.record_types
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::CustomRecordTypeNotFound(id.clone()))
    }

    fn find_by_item_id(&self, item_id: &str) -> Result<Option<InventoryRecord>, SourceError> {
        Ok(self.records.iter().find(|r| r.item_id == item_id).cloned())
    }
}
