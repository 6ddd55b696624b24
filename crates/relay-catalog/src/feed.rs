//! The product feed: one mapping run over an inventory collection.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use relay_netsuite::{InventoryRecord, RecordSource};

use crate::cache::RunCache;
use crate::error::CatalogError;
use crate::options::OptionResolver;
use crate::payload::{ProductMessage, ProductPayload, VariantPayload};
use crate::pricing;
use crate::reconcile::{self, OrphanPolicy, Partition};

/// Source-system tag stamped on every product payload.
pub const DEFAULT_CHANNEL: &str = "NetSuite";

/// One mapping run: a record collection, the caches it populates, and the
/// memoized message list it produces.
///
/// Output order is standalone products first, then matrix products, each
/// group in source order. The collection's ordering also carries the
/// watermark: [`last_modified`](Self::last_modified) reads the *last*
/// record's timestamp, not a maximum over the collection.
pub struct ProductFeed<S: RecordSource> {
    source: S,
    channel: String,
    policy: OrphanPolicy,
    collection: Vec<InventoryRecord>,
    cache: RunCache,
    messages: Option<Vec<ProductMessage>>,
}

impl<S: RecordSource> ProductFeed<S> {
    /// Poll the source for records modified since the previous watermark.
    pub fn poll(source: S, since: Option<DateTime<Utc>>) -> Result<Self, CatalogError> {
        let collection = source.fetch_latest(since)?;
        debug!(count = collection.len(), "polled inventory collection");
        Ok(Self::from_collection(source, collection))
    }

    /// Build a feed over an already-fetched collection. Source order must
    /// be preserved for the watermark to be meaningful.
    pub fn from_collection(source: S, collection: Vec<InventoryRecord>) -> Self {
        Self {
            source,
            channel: DEFAULT_CHANNEL.to_string(),
            policy: OrphanPolicy::default(),
            collection,
            cache: RunCache::new(),
            messages: None,
        }
    }

    /// Override the channel tag.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the orphaned-child policy.
    pub fn with_orphan_policy(mut self, policy: OrphanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The fetched collection, in source order.
    pub fn collection(&self) -> &[InventoryRecord] {
        &self.collection
    }

    /// The record source backing this run.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Watermark for the next poll: the last record's timestamp, `None`
    /// on an empty collection.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.collection.last().map(|r| r.last_modified)
    }

    /// The full message list, built on first call and reused afterwards.
    pub fn messages(&mut self) -> Result<&[ProductMessage], CatalogError> {
        if self.messages.is_none() {
            let built = self.build()?;
            self.messages = Some(built);
        }
        Ok(self.messages.as_deref().unwrap_or_default())
    }

    fn build(&mut self) -> Result<Vec<ProductMessage>, CatalogError> {
        let partition = reconcile::partition(&self.collection, &self.source, &mut self.cache)?;
        self.check_orphans(&partition)?;

        let mut messages: Vec<ProductMessage> = partition
            .standalone
            .iter()
            .map(|record| self.product_message(record, None))
            .collect();

        for parent in &partition.parents {
            let variants = self.map_children(parent, &partition)?;
            messages.push(self.product_message(parent, Some(variants)));
        }

        Ok(messages)
    }

    fn check_orphans(&self, partition: &Partition) -> Result<(), CatalogError> {
        for orphan in partition.orphans() {
            let parent_id = orphan
                .parent_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "<none>".to_string());

            match self.policy {
                OrphanPolicy::Strict => {
                    return Err(CatalogError::OrphanedChild {
                        child_id: orphan.internal_id.clone(),
                        parent_id,
                    });
                }
                OrphanPolicy::Lenient => {
                    warn!(
                        child_id = %orphan.internal_id,
                        parent_id = %parent_id,
                        "dropping matrix child with missing parent"
                    );
                }
            }
        }
        Ok(())
    }

    /// Map one child set into variants, resolving prices and options.
    fn map_children(
        &mut self,
        parent: &InventoryRecord,
        partition: &Partition,
    ) -> Result<Vec<VariantPayload>, CatalogError> {
        let parent_price = pricing::base_price(&parent.pricing_matrix);
        let mut variants = Vec::new();

        for child in partition.children_of(&parent.internal_id) {
            // The child's own price wins; the parent's covers children
            // with no resolvable price of their own.
            let price =
                pricing::base_price(&child.pricing_matrix).or_else(|| parent_price.clone());

            let mut resolver = OptionResolver::new(&self.source, &mut self.cache);
            let options = child
                .options
                .iter()
                .map(|selection| resolver.resolve(selection, parent))
                .collect::<Result<Vec<_>, _>>()?;

            variants.push(VariantPayload {
                price,
                sku: child.upc_code.clone(),
                options,
            });
        }

        Ok(variants)
    }

    fn product_message(
        &self,
        record: &InventoryRecord,
        variants: Option<Vec<VariantPayload>>,
    ) -> ProductMessage {
        ProductMessage::new(ProductPayload {
            name: record.display_name().to_string(),
            available_on: record.last_modified,
            description: record.sales_description.clone(),
            sku: record.upc_code.clone(),
            price: pricing::base_price(&record.pricing_matrix),
            cost_price: record.cost_estimate.clone(),
            channel: self.channel.clone(),
            variants,
        })
    }
}
