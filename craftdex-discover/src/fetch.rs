//! # Remote Catalog Fetch
//!
//! Download a published catalog document over HTTP, so a crawl can start
//! from someone else's crafting_data.json instead of the bare seeds.
//!
//! This is a one-shot static load: no retries, and every failure along
//! the way surfaces as LoadFailed naming the url.

use crate::error::{self, Result};
use craftdex_catalog::Catalog;
use reqwest::Client;
use std::time::Duration;

/// How long a catalog download may take end to end
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch and parse a catalog document from a URL
pub async fn fetch_catalog(url: &str) -> Result<Catalog> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client");

    let response = client.get(url).send().await.map_err(|e| {
        error::load_failed("could not retrieve catalog document")
            .with_operation("fetch::catalog")
            .with_context("url", url)
            .set_source(e)
    })?;

    let status = response.status().as_u16();
    if !response.status().is_success() {
        return Err(
            error::load_failed(format!("catalog fetch failed with status {}", status))
                .with_operation("fetch::catalog")
                .with_context("url", url),
        );
    }

    let body = response.text().await.map_err(|e| {
        error::load_failed("failed to read catalog response")
            .with_operation("fetch::catalog")
            .with_context("url", url)
            .set_source(e)
    })?;

    Catalog::from_json(&body)
        .map_err(|e| e.with_operation("fetch::catalog").with_context("url", url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_fetch_invalid_url_is_load_failed() {
        let err = fetch_catalog("not a url").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LoadFailed);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_refused_connection_is_load_failed() {
        // Nothing listens on the discard port
        let err = fetch_catalog("http://127.0.0.1:9/crafting_data.json")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LoadFailed);
    }
}
