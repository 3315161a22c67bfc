//! Concurrent SKU lookups
//!
//! Each SKU is looked up with its own search request, all in flight at once.
//! A failed lookup is logged and treated like "not found" so one bad SKU
//! cannot sink the batch. Only when every lookup fails does the batch fail.

use crate::error::{Result, WatchError};
use crate::models::Product;
use crate::search::SearchClient;
use futures::future::join_all;
use std::collections::HashSet;

/// Resolve each SKU to its current product.
///
/// SKUs that don't resolve are left out. Duplicate SKUs are looked up once.
/// Results come back in request order.
pub async fn resolve_many(client: &SearchClient, skus: &[String]) -> Result<Vec<Product>> {
    let mut seen = HashSet::new();
    let unique: Vec<&str> = skus
        .iter()
        .map(String::as_str)
        .filter(|sku| seen.insert(*sku))
        .collect();

    if unique.is_empty() {
        return Ok(Vec::new());
    }

    let results = join_all(unique.iter().map(|sku| client.lookup_by_sku(sku))).await;

    let attempted = results.len();
    let mut products = Vec::new();
    let mut failures = 0;
    let mut last_error = None;

    for (sku, result) in unique.iter().zip(results) {
        match result {
            Ok(Some(product)) => products.push(product),
            Ok(None) => log::info!("SKU {} not found in search results", sku),
            Err(e) => {
                log::warn!("Lookup for SKU {} failed: {}", sku, e);
                failures += 1;
                last_error = Some(e);
            }
        }
    }

    if failures == attempted {
        if let Some(e) = last_error {
            return Err(WatchError::AllLookupsFailed {
                attempted,
                last_error: Box::new(e),
            });
        }
    }

    log::info!("Resolved {} of {} SKUs", products.len(), attempted);
    Ok(products)
}
