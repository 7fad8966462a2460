use super::catalog::Catalog;
use crate::model::{Building, CatalogKind};
use crate::tree::visit_leaves;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One deduplicated line of the bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollupRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u64,
    pub locations: Vec<String>,
}

impl RollupRecord {
    fn new(kind: CatalogKind, id: &str, catalog: &dyn Catalog) -> Self {
        let resolved = match kind {
            CatalogKind::Product => catalog
                .resolve_product(id)
                .map(|info| (info.name, info.brand, info.category)),
            CatalogKind::Service => catalog
                .resolve_service(id)
                .map(|info| (info.name, None, info.category)),
        };

        let (name, brand, category) = resolved.unwrap_or_else(|| {
            tracing::debug!(kind = kind.label(), id, "no catalog metadata, using raw id");
            (id.to_string(), None, None)
        });

        Self {
            id: id.to_string(),
            name,
            brand,
            category,
            quantity: 0,
            locations: Vec::new(),
        }
    }
}

/// Products and services referenced anywhere in the tree, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rollup {
    pub products: Vec<RollupRecord>,
    pub services: Vec<RollupRecord>,
}

impl Rollup {
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&RollupRecord> {
        self.products.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn service(&self, id: &str) -> Option<&RollupRecord> {
        self.services.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.services.is_empty()
    }
}

/// Insertion-ordered records keyed by catalog id.
#[derive(Debug, Default)]
struct Accumulator {
    records: Vec<RollupRecord>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    fn add(
        &mut self,
        kind: CatalogKind,
        id: &str,
        quantity: u64,
        location: &str,
        catalog: &dyn Catalog,
    ) {
        let slot = if let Some(&slot) = self.index.get(id) {
            slot
        } else {
            self.records.push(RollupRecord::new(kind, id, catalog));
            self.index.insert(id.to_string(), self.records.len() - 1);
            self.records.len() - 1
        };

        let record = &mut self.records[slot];
        record.quantity = record.quantity.saturating_add(quantity);
        record.locations.push(location.to_string());
    }
}

/// Sums every product and service assignment in the tree.
///
/// Each occurrence contributes `quantity × multiplier` of its floor and room
/// ancestors and one location string. Quantities saturate at `u64::MAX`. Occurrences of the same id merge into
/// one record. Output order follows traversal order (see [`crate::tree`]), so
/// the same input always yields the same output.
#[must_use]
pub fn collect_assigned_items(buildings: &[Building], catalog: &dyn Catalog) -> Rollup {
    let mut products = Accumulator::default();
    let mut services = Accumulator::default();

    visit_leaves(buildings, |scope, leaf| {
        let assignments = leaf.assignments();
        if assignments.is_empty() {
            return;
        }

        let multiplier = scope.multiplier();
        let location = scope.location(leaf);

        for (id, quantity) in assignments.entries(CatalogKind::Product) {
            products.add(
                CatalogKind::Product,
                id,
                u64::from(quantity).saturating_mul(multiplier),
                &location,
                catalog,
            );
        }
        for (id, quantity) in assignments.entries(CatalogKind::Service) {
            services.add(
                CatalogKind::Service,
                id,
                u64::from(quantity).saturating_mul(multiplier),
                &location,
                catalog,
            );
        }
    });

    let rollup = Rollup {
        products: products.records,
        services: services.records,
    };
    tracing::debug!(
        products = rollup.products.len(),
        services = rollup.services.len(),
        "collected assigned items"
    );
    rollup
}
