use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display metadata for a catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Display metadata for a catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Lookup of catalog metadata by id. A miss is not an error.
pub trait Catalog {
    fn resolve_product(&self, id: &str) -> Option<ProductInfo>;
    fn resolve_service(&self, id: &str) -> Option<ServiceInfo>;
}

#[derive(Debug, Clone, Deserialize)]
struct ProductRow {
    id: String,
    #[serde(flatten)]
    info: ProductInfo,
}

#[derive(Debug, Clone, Deserialize)]
struct ServiceRow {
    id: String,
    #[serde(flatten)]
    info: ServiceInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<ProductRow>,
    #[serde(default)]
    services: Vec<ServiceRow>,
}

/// Catalog held in memory, typically read from a JSON export of the product list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "CatalogFile")]
pub struct InMemoryCatalog {
    products: HashMap<String, ProductInfo>,
    services: HashMap<String, ServiceInfo>,
}

impl From<CatalogFile> for InMemoryCatalog {
    fn from(file: CatalogFile) -> Self {
        Self {
            products: file.products.into_iter().map(|r| (r.id, r.info)).collect(),
            services: file.services.into_iter().map(|r| (r.id, r.info)).collect(),
        }
    }
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_product(mut self, id: impl Into<String>, info: ProductInfo) -> Self {
        self.products.insert(id.into(), info);
        self
    }

    #[must_use]
    pub fn with_service(mut self, id: impl Into<String>, info: ServiceInfo) -> Self {
        self.services.insert(id.into(), info);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len() + self.services.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for InMemoryCatalog {
    fn resolve_product(&self, id: &str) -> Option<ProductInfo> {
        self.products.get(id).cloned()
    }

    fn resolve_service(&self, id: &str) -> Option<ServiceInfo> {
        self.services.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_catalog_file_shape() {
        let catalog: InMemoryCatalog = serde_json::from_value(json!({
            "products": [{ "id": "P1", "name": "Cat6 patch panel", "brand": "Panduit", "category": "Passive" }],
            "services": [{ "id": "S1", "name": "Installation" }]
        }))
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.resolve_product("P1").and_then(|p| p.brand),
            Some("Panduit".to_string())
        );
        assert_eq!(catalog.resolve_service("S1").map(|s| s.name), Some("Installation".to_string()));
        assert!(catalog.resolve_product("S1").is_none());
    }
}
