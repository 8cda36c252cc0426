//! HTTP access to the provider's symbol catalog.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::SymbolMapError;

/// Default CoinAPI REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rest.coinapi.io";

/// Bounded request timeout. The catalog fetch happens once at construction
/// and must not hang the caller indefinitely; the success-path contract is
/// unchanged by the bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of the raw symbol catalog payload.
///
/// The loader only needs the full catalog for a set of exchange ids as one
/// string; tests substitute a stub implementation.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog payload for the given exchange ids.
    async fn fetch_catalog(&self, exchange_ids: &[&str]) -> Result<String, SymbolMapError>;
}

/// CoinAPI REST client for the `/v1/symbols` endpoint.
pub struct CoinApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CoinApiClient {
    /// Create a client for the given endpoint and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for CoinApiClient {
    async fn fetch_catalog(&self, exchange_ids: &[&str]) -> Result<String, SymbolMapError> {
        let filter = exchange_ids.join(",");
        let url = format!("{}/v1/symbols", self.base_url);
        debug!("Fetching symbol catalog for [{}]", filter);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("filter_symbol_id", filter.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
