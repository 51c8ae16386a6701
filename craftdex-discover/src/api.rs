//! # Combine API
//!
//! Client for the pair-combination endpoint of the crafting service.
//! One GET per pair, a fixed courtesy delay before each request, and
//! browser-like headers so the CDN in front of the service does not
//! reject the crawl.

use crate::error::{self, Result};
use craftdex_catalog::Pair;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Service the crawl talks to by default
pub const DEFAULT_BASE_URL: &str = "https://neal.fun";

/// Pair endpoint under the service root
const PAIR_ENDPOINT: &str = "/api/infinite-craft/pair";

/// Result of combining two items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crafted {
    /// Id of the crafted item
    pub name: String,
    /// Emoji for the crafted item
    pub emoji: String,
    /// Whether the service reports this as a first-ever discovery
    pub is_new: bool,
}

/// A provider that can combine two items into a new one
#[allow(async_fn_in_trait)]
pub trait CombineProvider: Send + Sync {
    /// Get the provider name for logs
    fn name(&self) -> &str;

    /// Combine a pair. `Ok(None)` means the pair produces nothing.
    async fn combine(&self, pair: &Pair) -> Result<Option<Crafted>>;
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the pair API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service root, joined with the pair endpoint path
    pub base_url: String,
    /// Courtesy delay before every request
    pub request_delay: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// Headers sent with every request
    pub headers: Vec<(String, String)>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
            headers: browser_headers(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Headers the reference browser sends. Without them the CDN is quick to
/// challenge the crawl.
fn browser_headers() -> Vec<(String, String)> {
    [
        ("authority", "neal.fun"),
        ("accept", "*/*"),
        ("accept-language", "en-US,en;q=0.9"),
        ("cache-control", "no-cache"),
        ("dnt", "1"),
        ("pragma", "no-cache"),
        ("referer", "https://neal.fun/infinite-craft/"),
        ("sec-ch-ua", "\"Chromium\";v=\"121\", \"Not A(Brand\";v=\"99\""),
        ("sec-ch-ua-mobile", "?0"),
        ("sec-ch-ua-platform", "\"macOS\""),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-origin"),
        (
            "user-agent",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client for the combine endpoint
pub struct PairApi {
    client: Client,
    config: ApiConfig,
}

impl PairApi {
    /// Create a client with the default service configuration
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    fn pair_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            PAIR_ENDPOINT
        )
    }
}

impl Default for PairApi {
    fn default() -> Self {
        Self::new()
    }
}

impl CombineProvider for PairApi {
    fn name(&self) -> &str {
        "pair-api"
    }

    async fn combine(&self, pair: &Pair) -> Result<Option<Crafted>> {
        // Fixed delay keeps the crawl under the service rate limit
        tokio::time::sleep(self.config.request_delay).await;

        let mut req = self
            .client
            .get(self.pair_url())
            .query(&[("first", pair.first()), ("second", pair.second())]);

        for (key, value) in &self.config.headers {
            req = req.header(key, value);
        }

        let response = req.send().await.map_err(|e| {
            error::network_failed(e.to_string())
                .with_operation("api::combine")
                .with_context("pair", pair.key())
                .set_source(e)
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            if status == 429 {
                return Err(error::rate_limited()
                    .with_operation("api::combine")
                    .with_context("pair", pair.key()));
            }

            let body = response.text().await.unwrap_or_default();
            return Err(error::craft_failed(status, body)
                .with_operation("api::combine")
                .with_context("pair", pair.key()));
        }

        let reply: PairResponse = response.json().await.map_err(|e| {
            error::parse_failed("combine response is not valid json")
                .with_operation("api::combine")
                .with_context("pair", pair.key())
                .set_source(e)
        })?;

        if reply.result.is_empty() {
            return Ok(None);
        }

        Ok(Some(Crafted {
            name: reply.result,
            emoji: reply.emoji,
            is_new: reply.is_new,
        }))
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct PairResponse {
    #[serde(default)]
    result: String,
    #[serde(default)]
    emoji: String,
    #[serde(default, rename = "isNew")]
    is_new: bool,
}
