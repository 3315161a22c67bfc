//! The two watch modes
//!
//! - Search mode: which products does a search term turn up, and is that
//!   list different from last time?
//! - Price mode: what do these SKUs cost now, and did any price move?
//!
//! With an output file the previous snapshot is loaded from it and the file is
//! rewritten only when something changed. Without one there is nothing to
//! compare against and every run counts as a change.

use crate::diff::{build_price_changes, price_snapshot, prices_changed, sku_snapshot, skus_changed};
use crate::error::{Result, WatchError};
use crate::lookup::resolve_many;
use crate::models::{PriceChange, Product};
use crate::search::SearchClient;
use crate::snapshot::{self, PriceSnapshot, SkuSnapshot};
use serde::Serialize;
use std::path::Path;

/// Result of a search-mode run
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub changed: bool,
    pub products: Vec<Product>,
}

/// Result of a price-mode run
#[derive(Debug, Serialize)]
pub struct PriceOutcome {
    pub changed: bool,
    pub prices: Vec<PriceChange>,
}

/// Search for `term` and compare the SKUs found against `output_file`
pub async fn run_search(
    client: &SearchClient,
    term: &str,
    output_file: Option<&Path>,
) -> Result<SearchOutcome> {
    let term = term.trim();
    if term.is_empty() {
        return Err(WatchError::InvalidInput("term must not be empty".to_string()));
    }

    let products = client.search(term).await?;
    log::info!("Search '{}' returned {} products", term, products.len());

    let changed = check_sku_difference(output_file, &sku_snapshot(&products))?;
    Ok(SearchOutcome { changed, products })
}

/// Look up each SKU and compare current prices against `output_file`
pub async fn run_price_check(
    client: &SearchClient,
    skus: &[String],
    output_file: Option<&Path>,
) -> Result<PriceOutcome> {
    let skus = normalize_skus(skus)?;
    let products = resolve_many(client, &skus).await?;
    let (changed, prices) = check_price_changes(&products, output_file)?;
    Ok(PriceOutcome { changed, prices })
}

/// Compare `current` with the stored SKU set, persisting it if different
pub fn check_sku_difference(output_file: Option<&Path>, current: &SkuSnapshot) -> Result<bool> {
    let Some(path) = output_file else {
        return Ok(true);
    };

    let previous = snapshot::load_skus(path)?;
    let changed = skus_changed(&previous, current);

    if changed {
        log::info!(
            "Search results changed ({} -> {} SKUs), updating {}",
            previous.len(),
            current.len(),
            path.display()
        );
        snapshot::save_skus(path, current)?;
    } else {
        log::info!("Search results unchanged");
    }

    Ok(changed)
}

/// Compare product prices with the stored price table, persisting it if different.
///
/// The rewritten table holds only `products`, so a SKU that failed to resolve
/// this run loses its stored price when another SKU's price moved.
pub fn check_price_changes(
    products: &[Product],
    output_file: Option<&Path>,
) -> Result<(bool, Vec<PriceChange>)> {
    let current = price_snapshot(products);

    let previous = match output_file {
        Some(path) => snapshot::load_prices(path)?,
        None => PriceSnapshot::new(),
    };

    let changed = prices_changed(&previous, &current);

    if let Some(path) = output_file {
        if changed {
            log::info!("Prices changed, updating {}", path.display());
            snapshot::save_prices(path, &current)?;
        } else {
            log::info!("Prices unchanged");
        }
    }

    Ok((changed, build_price_changes(&previous, products)))
}

fn normalize_skus(skus: &[String]) -> Result<Vec<String>> {
    if skus.is_empty() {
        return Err(WatchError::InvalidInput(
            "product_skus must list at least one SKU".to_string(),
        ));
    }

    skus.iter()
        .map(|sku| {
            let sku = sku.trim();
            if sku.is_empty() {
                Err(WatchError::InvalidInput("product_skus contains a blank SKU".to_string()))
            } else {
                Ok(sku.to_string())
            }
        })
        .collect()
}
