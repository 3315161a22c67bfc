//! K&L product search client
//!
//! Uses async reqwest to fetch the search results page, then runs every
//! result block through the extractor.

use crate::config::ClientConfig;
use crate::error::{Result, WatchError};
use crate::extract::extract_product;
use crate::html::parse_result_blocks;
use crate::models::Product;
use std::collections::HashSet;

pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the search results page for `term`
    pub fn search_url(&self, term: &str) -> String {
        format!(
            "{}/Products?searchText={}",
            self.base_url,
            urlencoding::encode(term)
        )
    }

    /// Search for `term` and return the products on the results page.
    ///
    /// Malformed result blocks are dropped. If a SKU shows up more than once
    /// the first listing wins.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>> {
        let page = self.fetch_page(term).await?;
        let blocks = parse_result_blocks(&page);

        let mut seen = HashSet::new();
        let products: Vec<Product> = blocks
            .iter()
            .filter_map(extract_product)
            .filter(|p| seen.insert(p.sku.clone()))
            .collect();

        log::debug!(
            "Search '{}': {} result blocks, {} products",
            term,
            blocks.len(),
            products.len()
        );

        Ok(products)
    }

    /// Find the product with exactly this SKU by searching for it.
    ///
    /// `Ok(None)` means the search worked but nothing matched.
    pub async fn lookup_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let products = self.search(sku).await?;
        Ok(products.into_iter().find(|p| p.sku == sku))
    }

    async fn fetch_page(&self, term: &str) -> Result<String> {
        let url = self.search_url(term);
        log::debug!("Fetching search page: {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WatchError::HttpStatus(response.status()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
