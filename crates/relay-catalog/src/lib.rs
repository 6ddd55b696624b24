//! Product mapping pipeline from ERP inventory records to storefront
//! payloads.
//!
//! The record source hands back a flat, self-referential collection:
//! standalone items, matrix parents, and matrix children mixed together,
//! with nested multi-currency pricing and option selections that only
//! make sense against the parent's custom-field catalog. This crate
//! reconciles that into a clean list of product messages:
//!
//! - [`reconcile`]: partition the collection and repair missing parents
//! - [`pricing`]: collapse the pricing matrix into a single base price
//! - [`options`]: resolve option selections into name/value pairs
//! - [`feed`]: orchestrate one memoized mapping run
//! - [`stock`]: quantity-available queries
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_catalog::prelude::*;
//!
//! let mut feed = ProductFeed::poll(source, previous_watermark)?;
//! let watermark = feed.last_modified();
//! for message in feed.messages()? {
//!     push_downstream(serde_json::to_value(message)?);
//! }
//! ```

pub mod cache;
pub mod error;
pub mod feed;
pub mod options;
pub mod payload;
pub mod pricing;
pub mod reconcile;
pub mod stock;

pub use error::CatalogError;
pub use feed::{ProductFeed, DEFAULT_CHANNEL};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cache::RunCache;
    pub use crate::error::CatalogError;
    pub use crate::feed::{ProductFeed, DEFAULT_CHANNEL};
    pub use crate::options::OptionResolver;
    pub use crate::payload::{
        ProductMessage, ProductPayload, StockMessage, VariantOption, VariantPayload,
    };
    pub use crate::pricing::base_price;
    pub use crate::reconcile::{partition, OrphanPolicy, Partition};
    pub use crate::stock::stock_level;
}
