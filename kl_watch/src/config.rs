//! HTTP client settings for the search client

use std::time::Duration;

/// Root of the K&L storefront
pub const DEFAULT_BASE_URL: &str = "http://www.klwines.com";

pub const DEFAULT_USER_AGENT: &str = "kl_watch/0.1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the HTTP side of a search
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Config pointing at another host (mock servers, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
