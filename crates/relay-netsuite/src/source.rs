//! Record-source abstraction.
//!
//! The source is the remote ERP behind a synchronous, blocking interface.
//! Transport concerns (retries, timeouts, auth) live behind the
//! implementation; failures surface as [`SourceError`] and abort the
//! caller's current pass.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::ids::{InternalId, OptionTypeId};
use crate::record::{CustomRecordType, InventoryRecord};

/// Errors surfaced by a record source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No record with the given internal id.
    #[error("record not found: {0}")]
    RecordNotFound(InternalId),

    /// No custom record type with the given id.
    #[error("custom record type not found: {0}")]
    CustomRecordTypeNotFound(OptionTypeId),

    /// Transport or backend failure.
    #[error("source backend error: {0}")]
    Backend(String),
}

/// Point-lookup and search access to inventory records.
///
/// `fetch_latest` must preserve source ordering: the last record's
/// timestamp is treated as the watermark for the next poll.
pub trait RecordSource {
    /// Records modified since the given watermark, in source order.
    fn fetch_latest(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<InventoryRecord>, SourceError>;

    /// Full form of a record by internal id, including the custom field
    /// catalog the searched-list form omits.
    fn get_by_id(&self, id: &InternalId) -> Result<InventoryRecord, SourceError>;

    /// Custom record type by id, for option-name resolution.
    fn get_custom_record_type(
        &self,
        id: &OptionTypeId,
    ) -> Result<CustomRecordType, SourceError>;

    /// Look a record up by item id. Absence is a valid outcome, not an
    /// error.
    fn find_by_item_id(&self, item_id: &str) -> Result<Option<InventoryRecord>, SourceError>;
}
