//! Removal of a catalog id from every assignment in the tree.

use crate::model::{Building, CatalogKind};
use crate::tree::visit_leaves_mut;

/// Id-keyed price store owned by the caller, evicted alongside a catalog delete.
pub trait PricingCache {
    /// Drops the cached price for `id`. Returns true if an entry existed.
    fn evict(&mut self, kind: CatalogKind, id: &str) -> bool;
}

/// Returns a copy of `buildings` with every `kind` assignment of `id` removed.
///
/// Visits the same leaves as [`crate::rollup::collect_assigned_items`].
/// Legacy single-id assignments were already folded into the lists when the
/// tree was read, so filtering the lists clears both shapes. Applying this
/// twice gives the same tree as applying it once.
#[must_use]
pub fn remove_catalog_reference(
    buildings: &[Building],
    kind: CatalogKind,
    id: &str,
) -> Vec<Building> {
    let mut next = buildings.to_vec();
    let mut stripped = 0usize;

    visit_leaves_mut(&mut next, |leaf| {
        if leaf.assignments_mut().remove(kind, id) {
            stripped += 1;
        }
    });

    tracing::debug!(kind = kind.label(), id, leaves = stripped, "removed catalog reference");
    next
}

/// Catalog delete: strips the id from the tree and evicts its cached price.
#[must_use]
pub fn delete_catalog_item(
    buildings: &[Building],
    kind: CatalogKind,
    id: &str,
    cache: &mut dyn PricingCache,
) -> Vec<Building> {
    let next = remove_catalog_reference(buildings, kind, id);
    if !cache.evict(kind, id) {
        tracing::debug!(kind = kind.label(), id, "no cached price to evict");
    }
    next
}
