//! Turns one rendered search result block into a [`Product`].
//!
//! The extractor works on a plain [`ResultBlock`] (text plus link attributes)
//! so it does not care which HTML parser produced it. Blocks that cannot be
//! identified are rejected with `None`; they never abort the batch.

use crate::models::Product;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Link attribute carrying the product SKU on K&L result pages
pub const SKU_ATTRIBUTE: &str = "data-app-insights-track-search-doc-id";

/// Lines containing this marker are promotional banners, not product names
pub const BANNER_MARKER: char = '!';

lazy_static! {
    static ref PRICE_RE: Regex = Regex::new(r"Price:\s*\$\s*(\d[\d,]*(?:\.\d+)?)").unwrap();
}

/// An anchor inside a result block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub attributes: HashMap<String, String>,
}

impl Link {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One result container: its rendered text (one visual line per `\n`) and its links
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBlock {
    pub text: String,
    pub links: Vec<Link>,
}

/// Extract a product from a result block.
///
/// Returns `None` when no link carries a SKU or when every text line is a banner.
pub fn extract_product(block: &ResultBlock) -> Option<Product> {
    let Some(sku) = extract_sku(block) else {
        log::debug!("Skipping result block without a SKU link");
        return None;
    };

    let Some(name) = extract_name(&block.text) else {
        log::debug!("Skipping result block {} without a product name", sku);
        return None;
    };

    Some(Product::new(sku, name, extract_price(&block.text)))
}

fn extract_sku(block: &ResultBlock) -> Option<&str> {
    block
        .links
        .iter()
        .find_map(|link| link.attr(SKU_ATTRIBUTE))
        .map(str::trim)
        .filter(|sku| !sku.is_empty())
}

fn extract_name(text: &str) -> Option<&str> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.contains(BANNER_MARKER))
}

/// Parse the first `Price: $x.yy` in the text. Thousands separators are allowed.
///
/// Rounded to whole cents, the precision price snapshots are stored at.
pub fn extract_price(text: &str) -> Option<f64> {
    let caps = PRICE_RE.captures(text)?;
    let price: f64 = caps[1].replace(',', "").parse().ok()?;
    Some((price * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku_link(sku: &str) -> Link {
        Link {
            attributes: HashMap::from([
                ("href".to_string(), format!("/p/i?i={sku}")),
                (SKU_ATTRIBUTE.to_string(), sku.to_string()),
            ]),
        }
    }

    fn plain_link(href: &str) -> Link {
        Link {
            attributes: HashMap::from([("href".to_string(), href.to_string())]),
        }
    }

    fn block(text: &str, links: Vec<Link>) -> ResultBlock {
        ResultBlock {
            text: text.to_string(),
            links,
        }
    }

    #[test]
    fn extracts_sku_name_and_price() {
        let b = block(
            "Laphroaig 10 Year Old Islay Single Malt (750ml)\nPrice: $54.99\nIn Stock",
            vec![sku_link("1234567")],
        );
        let product = extract_product(&b).unwrap();
        assert_eq!(product.sku, "1234567");
        assert_eq!(product.name, "Laphroaig 10 Year Old Islay Single Malt (750ml)");
        assert_eq!(product.price, Some(54.99));
    }

    #[test]
    fn block_without_sku_link_is_rejected() {
        let b = block("Some Whisky\nPrice: $10.00", vec![plain_link("/somewhere")]);
        assert!(extract_product(&b).is_none());
    }

    #[test]
    fn block_without_links_is_rejected() {
        let b = block("Some Whisky\nPrice: $10.00", vec![]);
        assert!(extract_product(&b).is_none());
    }

    #[test]
    fn sku_taken_from_first_link_that_carries_it() {
        let b = block(
            "Octomore 10.3\nPrice: $249.99",
            vec![plain_link("/img"), sku_link("1441557"), sku_link("999")],
        );
        assert_eq!(extract_product(&b).unwrap().sku, "1441557");
    }

    #[test]
    fn banner_lines_are_skipped_for_name() {
        let b = block(
            "Staff Pick!\nAlert! Limited Allocation\nArdbeg Uigeadail (750ml)\nPrice: $79.99",
            vec![sku_link("42")],
        );
        assert_eq!(extract_product(&b).unwrap().name, "Ardbeg Uigeadail (750ml)");
    }

    #[test]
    fn block_with_only_banner_lines_is_rejected() {
        let b = block("Sale!\nHurry!", vec![sku_link("42")]);
        assert!(extract_product(&b).is_none());
    }

    #[test]
    fn missing_price_is_none_not_zero() {
        let b = block("Mystery Bottle\nCall for price", vec![sku_link("7")]);
        let product = extract_product(&b).unwrap();
        assert_eq!(product.price, None);
    }

    #[test]
    fn price_with_thousands_separator() {
        assert_eq!(extract_price("Price: $1,299.99\n"), Some(1299.99));
    }

    #[test]
    fn price_without_cents() {
        assert_eq!(extract_price("Price: $45\n"), Some(45.0));
    }

    #[test]
    fn price_split_across_lines() {
        assert_eq!(extract_price("Price:\n$12.50"), Some(12.5));
    }

    #[test]
    fn sub_cent_price_rounds_to_cents() {
        assert_eq!(extract_price("Price: $9.999\n"), Some(10.0));
        assert_eq!(extract_price("Price: $4.994\n"), Some(4.99));
    }

    #[test]
    fn first_price_wins() {
        assert_eq!(extract_price("Price: $10.00\nPrice: $20.00"), Some(10.0));
    }

    #[test]
    fn blank_sku_attribute_is_rejected() {
        let b = block("Some Whisky", vec![sku_link("  ")]);
        assert!(extract_product(&b).is_none());
    }
}
