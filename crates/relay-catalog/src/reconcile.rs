//! Parent/child reconciliation.
//!
//! The searched collection is flat and self-referential: standalone
//! items, matrix parents, and matrix children all arrive in one list.
//! Some remote queries omit parent records entirely, returning only the
//! children; those parents are repaired by point lookup.

use std::collections::HashSet;

use relay_netsuite::{InternalId, InventoryRecord, MatrixType, RecordSource};
use serde::{Deserialize, Serialize};

use crate::cache::RunCache;
use crate::error::CatalogError;

/// What to do with a matrix child whose parent is absent from the
/// resolved parent list.
///
/// Partial matrix result sets can carry some parents while missing
/// others. Lenient mode drops the orphaned children from variant
/// construction; strict mode fails the run instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    /// Drop orphaned children from variant construction (logged at WARN).
    #[default]
    Lenient,
    /// Fail the mapping run on the first orphaned child.
    Strict,
}

/// The record collection partitioned by matrix classification.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Records that are neither parent nor child, in source order.
    pub standalone: Vec<InventoryRecord>,
    /// Matrix parents: explicit ones from the collection, or synthesized
    /// from the children's parent references when none were returned.
    pub parents: Vec<InventoryRecord>,
    /// Matrix children, in source order.
    pub children: Vec<InventoryRecord>,
}

impl Partition {
    /// Children associated with the given parent, by exact id match,
    /// preserving source order.
    pub fn children_of<'a>(
        &'a self,
        parent_id: &'a InternalId,
    ) -> impl Iterator<Item = &'a InventoryRecord> {
        self.children
            .iter()
            .filter(move |c| c.parent_id() == Some(parent_id))
    }

    /// Children whose parent is absent from the resolved parent list.
    pub fn orphans(&self) -> Vec<&InventoryRecord> {
        let known: HashSet<&InternalId> =
            self.parents.iter().map(|p| &p.internal_id).collect();
        self.children
            .iter()
            .filter(|c| c.parent_id().map_or(true, |id| !known.contains(id)))
            .collect()
    }
}

/// Partition a collection into standalone items, parents, and children.
///
/// When the collection holds children but no explicit parents, the parent
/// list is synthesized by point-fetching each distinct referenced parent
/// id, deduplicated through the run cache.
pub fn partition<S: RecordSource>(
    collection: &[InventoryRecord],
    source: &S,
    cache: &mut RunCache,
) -> Result<Partition, CatalogError> {
    let mut result = Partition::default();

    for record in collection {
        match record.matrix_type {
            MatrixType::None => result.standalone.push(record.clone()),
            MatrixType::Parent => result.parents.push(record.clone()),
            MatrixType::Child => result.children.push(record.clone()),
        }
    }

    if result.parents.is_empty() && !result.children.is_empty() {
        result.parents = synthesize_parents(&result.children, source, cache)?;
    }

    Ok(result)
}

/// Fetch each distinct parent referenced by the children, in first
/// reference order.
fn synthesize_parents<S: RecordSource>(
    children: &[InventoryRecord],
    source: &S,
    cache: &mut RunCache,
) -> Result<Vec<InventoryRecord>, CatalogError> {
    let mut seen = HashSet::new();
    let mut parents = Vec::new();

    for child in children {
        let Some(parent_id) = child.parent_id() else {
            continue;
        };
        if seen.insert(parent_id.clone()) {
            parents.push(cache.parent(source, parent_id)?.clone());
        }
    }

    Ok(parents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_netsuite::memory::MemorySource;
    use relay_netsuite::testing;

    #[test]
    fn test_partition_by_matrix_type() {
        let collection = vec![
            testing::record("1", "PLAIN", MatrixType::None),
            testing::record("10", "SHIRT", MatrixType::Parent),
            testing::child_of("11", "SHIRT-S", "10"),
            testing::child_of("12", "SHIRT-L", "10"),
        ];
        let source = MemorySource::new(collection.clone());
        let mut cache = RunCache::new();

        let partition = partition(&collection, &source, &mut cache).unwrap();

        assert_eq!(partition.standalone.len(), 1);
        assert_eq!(partition.parents.len(), 1);
        assert_eq!(partition.children.len(), 2);
        assert_eq!(source.get_calls(), 0);
    }

    #[test]
    fn test_synthesizes_parents_when_none_returned() {
        let children = vec![
            testing::child_of("11", "SHIRT-S", "10"),
            testing::child_of("12", "SHIRT-L", "10"),
            testing::child_of("21", "MUG-BLUE", "20"),
        ];
        let source = MemorySource::new(children.clone())
            .with_detail(testing::record("10", "SHIRT", MatrixType::Parent))
            .with_detail(testing::record("20", "MUG", MatrixType::Parent));
        let mut cache = RunCache::new();

        let partition = partition(&children, &source, &mut cache).unwrap();

        assert_eq!(partition.parents.len(), 2);
        assert_eq!(partition.parents[0].item_id, "SHIRT");
        assert_eq!(partition.parents[1].item_id, "MUG");
        // One point lookup per distinct parent, children sharing a
        // parent reuse the cache.
        assert_eq!(source.get_calls(), 2);
    }

    #[test]
    fn test_no_synthesis_when_explicit_parents_exist() {
        let collection = vec![
            testing::record("10", "SHIRT", MatrixType::Parent),
            testing::child_of("11", "SHIRT-S", "10"),
            testing::child_of("99", "GHOST-S", "90"),
        ];
        let source = MemorySource::new(collection.clone());
        let mut cache = RunCache::new();

        let partition = partition(&collection, &source, &mut cache).unwrap();

        // Parent 90 is not fetched; the child referencing it is an orphan.
        assert_eq!(partition.parents.len(), 1);
        assert_eq!(source.get_calls(), 0);
        let orphans = partition.orphans();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].item_id, "GHOST-S");
    }

    #[test]
    fn test_synthesis_fails_when_parent_unknown_to_source() {
        let children = vec![testing::child_of("11", "SHIRT-S", "10")];
        let source = MemorySource::new(children.clone());
        let mut cache = RunCache::new();

        // get_by_id falls back to the search list, which also lacks the
        // parent record.
        assert!(partition(&children, &source, &mut cache).is_err());
    }

    #[test]
    fn test_children_of_matches_exact_id() {
        let collection = vec![
            testing::record("10", "SHIRT", MatrixType::Parent),
            testing::child_of("11", "SHIRT-S", "10"),
            testing::child_of("12", "SHIRT-L", "100"),
        ];
        let source = MemorySource::new(collection.clone());
        let mut cache = RunCache::new();

        let partition = partition(&collection, &source, &mut cache).unwrap();
        let id = InternalId::new("10");
        let matched: Vec<_> = partition.children_of(&id).map(|c| c.item_id.as_str()).collect();

        assert_eq!(matched, vec!["SHIRT-S"]);
    }
}
