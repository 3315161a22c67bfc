//! Persisted state from the previous run
//!
//! Two on-disk formats:
//! - SKU snapshot: plain text, one SKU per line, sorted ascending, no header
//! - Price snapshot: CSV with a `sku,price` header; price has two decimals or is empty
//!
//! A missing file is "no prior state" and loads as empty. Loading only ever
//! opens the file for reading.

use crate::error::Result;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// SKUs seen on the last search
pub type SkuSnapshot = BTreeSet<String>;

/// Last known price per SKU; `None` when the product had no listed price
pub type PriceSnapshot = BTreeMap<String, Option<f64>>;

const PRICE_HEADERS: [&str; 2] = ["sku", "price"];

/// Load the SKU set written by [`save_skus`]
pub fn load_skus(path: &Path) -> Result<SkuSnapshot> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SkuSnapshot::new()),
        Err(e) => return Err(e.into()),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Overwrite `path` with the sorted, newline-joined SKUs
pub fn save_skus(path: &Path, skus: &SkuSnapshot) -> Result<()> {
    let content = skus.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
    fs::write(path, content)?;
    log::debug!("Wrote {} SKUs to {}", skus.len(), path.display());
    Ok(())
}

/// Load the price table written by [`save_prices`].
///
/// Price fields that don't parse (including empty ones) load as `None`.
pub fn load_prices(path: &Path) -> Result<PriceSnapshot> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PriceSnapshot::new()),
        Err(e) => return Err(e.into()),
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut prices = PriceSnapshot::new();
    for record in rdr.records() {
        let record = record?;
        let Some(sku) = record.get(0).filter(|s| !s.is_empty()) else {
            continue;
        };
        prices.insert(sku.to_string(), parse_price(record.get(1)));
    }

    Ok(prices)
}

/// Overwrite `path` with a header row and one row per SKU
pub fn save_prices(path: &Path, prices: &PriceSnapshot) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(PRICE_HEADERS)?;
    for (sku, price) in prices {
        let price = format_price(*price);
        wtr.write_record([sku.as_str(), price.as_str()])?;
    }
    wtr.flush()?;
    log::debug!("Wrote {} prices to {}", prices.len(), path.display());
    Ok(())
}

fn parse_price(field: Option<&str>) -> Option<f64> {
    field?.parse::<f64>().ok().filter(|p| p.is_finite())
}

fn format_price(price: Option<f64>) -> String {
    price.map(|p| format!("{p:.2}")).unwrap_or_default()
}
