//! Prices applied on top of a rollup.
//!
//! Sell prices are grossed up from a target margin, not marked up:
//! `sell = unit / (1 - margin / 100)`. A margin of 40% on a cost of 60
//! sells at 100.

use crate::cascade::PricingCache;
use crate::error::PricingError;
use crate::model::CatalogKind;
use crate::rollup::{Rollup, RollupRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    pub unit_price: f64,
    #[serde(default)]
    pub margin_percent: f64,
}

/// Id-keyed prices for both sides of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceOverlay {
    #[serde(default)]
    pub products: HashMap<String, PriceEntry>,
    #[serde(default)]
    pub services: HashMap<String, PriceEntry>,
}

impl PriceOverlay {
    #[must_use]
    pub fn get(&self, kind: CatalogKind, id: &str) -> Option<&PriceEntry> {
        match kind {
            CatalogKind::Product => self.products.get(id),
            CatalogKind::Service => self.services.get(id),
        }
    }
}

impl PricingCache for PriceOverlay {
    fn evict(&mut self, kind: CatalogKind, id: &str) -> bool {
        match kind {
            CatalogKind::Product => self.products.remove(id).is_some(),
            CatalogKind::Service => self.services.remove(id).is_some(),
        }
    }
}

/// Unit sell price for a target margin. `None` when the margin is 100% or
/// more (or not a number), where no finite price reaches it.
#[must_use]
pub fn gross_up(unit_price: f64, margin_percent: f64) -> Option<f64> {
    if !margin_percent.is_finite() || margin_percent >= 100.0 {
        return None;
    }
    Some(unit_price / (1.0 - margin_percent / 100.0))
}

/// A rollup record with its prices. Unpriced records keep `None` prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub kind: CatalogKind,
    #[serde(flatten)]
    pub record: RollupRecord,
    pub unit_price: Option<f64>,
    pub margin_percent: Option<f64>,
    pub sell_price: Option<f64>,
    pub line_total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedBom {
    pub products: Vec<PricedLine>,
    pub services: Vec<PricedLine>,
    pub products_total: f64,
    pub services_total: f64,
}

impl PricedBom {
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.products_total + self.services_total
    }

    pub fn lines(&self) -> impl Iterator<Item = &PricedLine> {
        self.products.iter().chain(&self.services)
    }
}

fn price_line(
    kind: CatalogKind,
    record: &RollupRecord,
    overlay: &PriceOverlay,
) -> Result<PricedLine, PricingError> {
    let Some(entry) = overlay.get(kind, &record.id) else {
        return Ok(PricedLine {
            kind,
            record: record.clone(),
            unit_price: None,
            margin_percent: None,
            sell_price: None,
            line_total: None,
        });
    };

    let sell_price =
        gross_up(entry.unit_price, entry.margin_percent).ok_or_else(|| PricingError::InvalidMargin {
            kind,
            id: record.id.clone(),
            margin_percent: entry.margin_percent,
        })?;

    Ok(PricedLine {
        kind,
        record: record.clone(),
        unit_price: Some(entry.unit_price),
        margin_percent: Some(entry.margin_percent),
        sell_price: Some(sell_price),
        line_total: Some(sell_price * record.quantity as f64),
    })
}

fn price_side(
    kind: CatalogKind,
    records: &[RollupRecord],
    overlay: &PriceOverlay,
) -> Result<(Vec<PricedLine>, f64), PricingError> {
    let lines = records
        .iter()
        .map(|record| price_line(kind, record, overlay))
        .collect::<Result<Vec<_>, _>>()?;
    let total: f64 = lines.iter().filter_map(|l| l.line_total).sum();
    Ok((lines, total))
}

/// Applies `overlay` to every record of `rollup`.
pub fn price_rollup(rollup: &Rollup, overlay: &PriceOverlay) -> Result<PricedBom, PricingError> {
    let (products, products_total) = price_side(CatalogKind::Product, &rollup.products, overlay)?;
    let (services, services_total) = price_side(CatalogKind::Service, &rollup.services, overlay)?;

    Ok(PricedBom {
        products,
        services,
        products_total,
        services_total,
    })
}
