//! Mapping pipeline error types.

use relay_netsuite::{InternalId, OptionTypeId, OptionValueId, SourceError};
use thiserror::Error;

/// Errors that can occur while mapping a record collection.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A child's option selection has no matching declared value in any
    /// multi-select field on the parent. Either the catalog is stale or
    /// the selection references a retracted option.
    #[error(
        "no declared option value matching type {type_id} value {value_id} on parent {parent_id}"
    )]
    OptionValueNotFound {
        type_id: OptionTypeId,
        value_id: OptionValueId,
        parent_id: InternalId,
    },

    /// A matrix child's parent is missing from the collection. Raised
    /// only under [`OrphanPolicy::Strict`](crate::reconcile::OrphanPolicy).
    #[error("matrix child {child_id} references parent {parent_id} absent from the collection")]
    OrphanedChild {
        child_id: InternalId,
        parent_id: String,
    },

    /// Record source failure; aborts the current pass.
    #[error(transparent)]
    Source(#[from] SourceError),
}
