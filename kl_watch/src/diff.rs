//! Change detection between the stored snapshot and the current run
//!
//! Pure in-memory comparisons; the snapshot module owns the files.
//!
//! - SKU mode: changed when the two SKU sets differ in any way
//! - Price mode: changed when a currently listed SKU is new or its price moved.
//!   SKUs that dropped out of the results do not count as a change on their own.

use crate::models::{PriceChange, Product};
use crate::snapshot::{PriceSnapshot, SkuSnapshot};

/// Has the set of listed SKUs changed since last time?
pub fn skus_changed(previous: &SkuSnapshot, current: &SkuSnapshot) -> bool {
    if previous.is_empty() && !current.is_empty() {
        return true;
    }
    previous != current
}

/// Is any currently listed SKU new, or priced differently than before?
///
/// Absent prices compare equal to each other and unequal to any number.
pub fn prices_changed(previous: &PriceSnapshot, current: &PriceSnapshot) -> bool {
    if previous.is_empty() && !current.is_empty() {
        return true;
    }
    current
        .iter()
        .any(|(sku, price)| previous.get(sku) != Some(price))
}

/// One [`PriceChange`] per current product, in product order
pub fn build_price_changes(previous: &PriceSnapshot, current: &[Product]) -> Vec<PriceChange> {
    current
        .iter()
        .map(|product| PriceChange::new(product, previous.get(&product.sku).copied().flatten()))
        .collect()
}

/// Current prices keyed by SKU
pub fn price_snapshot(products: &[Product]) -> PriceSnapshot {
    products
        .iter()
        .map(|p| (p.sku.clone(), p.price))
        .collect()
}

/// Current SKUs as a set
pub fn sku_snapshot(products: &[Product]) -> SkuSnapshot {
    products.iter().map(|p| p.sku.clone()).collect()
}
