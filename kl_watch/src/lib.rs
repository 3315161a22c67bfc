//! kl_watch - K&L search and price watcher
//!
//! Scrapes K&L search results for a term (or a list of SKUs), compares them
//! with a small snapshot file from the previous run and reports whether the
//! product list or any price changed.

pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod html;
pub mod lookup;
pub mod models;
pub mod output;
pub mod search;
pub mod snapshot;
pub mod watch;

#[cfg(test)]
mod test_support;

pub use config::ClientConfig;
pub use error::{Error, Result, WatchError};
pub use models::{PriceChange, Product};
pub use search::SearchClient;
pub use watch::{run_price_check, run_search, PriceOutcome, SearchOutcome};
