//! NetSuite inventory record model and record-source abstraction.
//!
//! This crate models the denormalized record set the ERP hands back
//! (standalone items, matrix parents, matrix children, nested
//! multi-currency pricing, custom-field option catalogs) and the synchronous
//! [`RecordSource`](source::RecordSource) interface the mapping pipeline
//! pulls records through.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_netsuite::prelude::*;
//!
//! let source = MemorySource::from_fixture(fixture);
//! let collection = source.fetch_latest(None)?;
//! for record in &collection {
//!     println!("{} ({:?})", record.display_name(), record.matrix_type);
//! }
//! ```

pub mod custom_field;
pub mod ids;
pub mod memory;
pub mod pricing;
pub mod record;
pub mod source;
pub mod testing;

pub use ids::{InternalId, OptionTypeId, OptionValueId};
pub use record::{CustomRecordType, InventoryRecord, MatrixType, ParentRef};
pub use source::{RecordSource, SourceError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::custom_field::{
        CustomField, CustomFieldKind, CustomFieldList, OptionSelection, OptionValueEntry,
    };
    pub use crate::ids::{InternalId, OptionTypeId, OptionValueId};
    pub use crate::memory::{Fixture, MemorySource};
    pub use crate::pricing::{NamedRef, PriceEntry, PriceList, PriceTier, PricingMatrix};
    pub use crate::record::{CustomRecordType, InventoryRecord, MatrixType, ParentRef};
    pub use crate::source::{RecordSource, SourceError};
}
