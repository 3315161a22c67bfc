//! Canned search pages for tests

use crate::config::ClientConfig;
use crate::search::SearchClient;

/// One `div.tf-product` block. `price` is the raw text after `$`.
pub fn product_block(sku: &str, name: &str, price: Option<&str>) -> String {
    let price_html = price
        .map(|p| format!(r#"<div class="tf-price">Price: ${p}</div>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="tf-product">
             <div><a href="/p/i?i={sku}" data-app-insights-track-search-doc-id="{sku}">{name}</a></div>
             {price_html}
           </div>"#
    )
}

/// A results page wrapping the given blocks
pub fn results_page(blocks: &[String]) -> String {
    format!("<html><body>{}</body></html>", blocks.join("\n"))
}

pub fn client_for(base_url: &str) -> SearchClient {
    SearchClient::new(&ClientConfig::with_base_url(base_url)).unwrap()
}
