//! Equivalence resolution
//!
//! Folds the collisions recorded by the scan into a disjoint set. The order
//! in which pairs are applied changes tree shapes but not the partition.

use crate::scan::EquivalenceRecord;
use crate::union_find::DisjointSet;

/// Build a disjoint set of `capacity` slots and unite every recorded pair.
///
/// `capacity` must exceed every label in `record`; the scan's
/// [`ScanOutcome::capacity`](crate::scan::ScanOutcome::capacity) does.
///
/// # Panics
///
/// Panics if a recorded label is `>= capacity`.
pub fn resolve_equivalences(record: &EquivalenceRecord, capacity: usize) -> DisjointSet {
    let mut set = DisjointSet::new(capacity);
    for eq in record.iter() {
        set.unite(eq.min_label, eq.other_label);
    }
    set
}
