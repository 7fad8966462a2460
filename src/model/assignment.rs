use serde::{Deserialize, Serialize};

/// Link from a physical leaf to a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAssignment {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Link from a physical leaf to a catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAssignment {
    pub service_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Which side of the catalog an id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogKind {
    Product,
    Service,
}

impl CatalogKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CatalogKind::Product => "product",
            CatalogKind::Service => "service",
        }
    }
}

/// Normalized product and service assignments of one leaf.
///
/// Stored documents may still carry the legacy single-assignment shape
/// (`productId` / `serviceId` next to a `quantity`). Those fields are folded
/// into the lists when the document is read and never written back, so the
/// rest of the crate only ever sees `products` and `services`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAssignments", into = "RawAssignments")]
pub struct Assignments {
    pub products: Vec<ProductAssignment>,
    pub services: Vec<ServiceAssignment>,
}

impl Assignments {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.services.is_empty()
    }

    /// Sets the quantity for `product_id`, appending a new entry if absent.
    pub fn upsert_product(&mut self, product_id: &str, quantity: u32) {
        match self.products.iter_mut().find(|p| p.product_id == product_id) {
            Some(existing) => existing.quantity = quantity,
            None => self.products.push(ProductAssignment {
                product_id: product_id.to_string(),
                quantity,
            }),
        }
    }

    /// Sets the quantity and notes for `service_id`, appending a new entry if absent.
    pub fn upsert_service(&mut self, service_id: &str, quantity: u32, notes: Option<String>) {
        match self.services.iter_mut().find(|s| s.service_id == service_id) {
            Some(existing) => {
                existing.quantity = quantity;
                existing.notes = notes;
            }
            None => self.services.push(ServiceAssignment {
                service_id: service_id.to_string(),
                quantity,
                notes,
            }),
        }
    }

    /// Drops every entry referencing `id`. Returns true if anything was removed.
    pub fn remove(&mut self, kind: CatalogKind, id: &str) -> bool {
        match kind {
            CatalogKind::Product => {
                let before = self.products.len();
                self.products.retain(|p| p.product_id != id);
                before != self.products.len()
            }
            CatalogKind::Service => {
                let before = self.services.len();
                self.services.retain(|s| s.service_id != id);
                before != self.services.len()
            }
        }
    }

    /// `(catalog id, quantity)` pairs for one side of the catalog, in stored order.
    #[must_use]
    pub fn entries(&self, kind: CatalogKind) -> Vec<(&str, u32)> {
        match kind {
            CatalogKind::Product => self
                .products
                .iter()
                .map(|p| (p.product_id.as_str(), p.quantity))
                .collect(),
            CatalogKind::Service => self
                .services
                .iter()
                .map(|s| (s.service_id.as_str(), s.quantity))
                .collect(),
        }
    }
}

fn default_quantity() -> u32 {
    1
}

/// Wire shape of the assignment fields, legacy keys included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssignments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    products: Option<Vec<ProductAssignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    services: Option<Vec<ServiceAssignment>>,
    #[serde(default, skip_serializing)]
    product_id: Option<String>,
    #[serde(default, skip_serializing)]
    service_id: Option<String>,
    #[serde(default, skip_serializing)]
    quantity: Option<u32>,
}

impl From<RawAssignments> for Assignments {
    fn from(raw: RawAssignments) -> Self {
        let quantity = raw.quantity.unwrap_or(1);

        // A non-empty list wins over the legacy field; blank legacy ids are ignored.
        let products = match raw.products {
            Some(list) if !list.is_empty() => list,
            _ => raw
                .product_id
                .filter(|id| !id.is_empty())
                .map(|product_id| vec![ProductAssignment {
                    product_id,
                    quantity,
                }])
                .unwrap_or_default(),
        };

        let services = match raw.services {
            Some(list) if !list.is_empty() => list,
            _ => raw
                .service_id
                .filter(|id| !id.is_empty())
                .map(|service_id| vec![ServiceAssignment {
                    service_id,
                    quantity,
                    notes: None,
                }])
                .unwrap_or_default(),
        };

        Self { products, services }
    }
}

impl From<Assignments> for RawAssignments {
    fn from(assignments: Assignments) -> Self {
        Self {
            products: Some(assignments.products),
            services: Some(assignments.services),
            ..Self::default()
        }
    }
}
