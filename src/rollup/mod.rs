//! Bill-of-materials rollup over the building tree.

pub mod catalog;
pub mod collect;

pub use catalog::{Catalog, InMemoryCatalog, ProductInfo, ServiceInfo};
pub use collect::{collect_assigned_items, Rollup, RollupRecord};
