//! Symbol catalog loading.
//!
//! The loader turns the provider's symbol catalog into the in-memory
//! lookup table the mapper reads from:
//!
//! 1. Read the local cache file when caching is enabled and the staleness
//!    window allows it, otherwise fetch `/v1/symbols` remotely (persisting
//!    the payload when caching is enabled).
//! 2. Parse the payload into raw catalog records.
//! 3. Filter to SPOT entries, resolve each exchange id to its canonical
//!    market, compose the alias-resolved ticker and index by symbol.
//!
//! Any failure along the way is fatal to the load; no partial table is
//! ever returned.

mod cache;
mod client;

pub use client::{CatalogSource, CoinApiClient, DEFAULT_BASE_URL};

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use log::{info, warn};

use crate::errors::SymbolMapError;
use crate::models::{CatalogEntry, Symbol};
use crate::resolver::{compose_ticker, CurrencyAliasTable, ExchangeRegistry, SPOT_CLASS};

/// Mapping from canonical symbols to provider symbol ids.
///
/// Built once per load and read-only afterwards; concurrent reads need no
/// locking because nothing writes after construction.
pub type SymbolTable = HashMap<Symbol, String>;

/// Loader configuration, supplied by the embedding application and only
/// read here.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// CoinAPI key, sent as the `apiKey` query parameter.
    pub api_key: String,
    /// When true, the loader reads and writes the local cache file.
    pub use_local_symbol_list: bool,
    /// Location of the local catalog cache file.
    pub cache_path: PathBuf,
    /// REST endpoint base; overridable for tests.
    pub base_url: String,
}

impl CatalogConfig {
    /// Configuration with the default endpoint, caching disabled and the
    /// default cache file location.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_local_symbol_list: false,
            cache_path: PathBuf::from("CoinApiSymbols.json"),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Load the symbol table: read the cached payload or fetch remotely, then
/// parse and index it.
pub async fn load_symbol_table<S: CatalogSource>(
    config: &CatalogConfig,
    source: &S,
    registry: &ExchangeRegistry,
    aliases: &CurrencyAliasTable,
) -> Result<SymbolTable, SymbolMapError> {
    let payload = load_payload(config, source, registry).await?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&payload)?;
    build_table(entries, registry, aliases)
}

async fn load_payload<S: CatalogSource>(
    config: &CatalogConfig,
    source: &S,
    registry: &ExchangeRegistry,
) -> Result<String, SymbolMapError> {
    if config.use_local_symbol_list {
        if let Some(payload) = cache::read_cached_payload(&config.cache_path, Utc::now())? {
            return Ok(payload);
        }
    }

    let exchange_ids: Vec<&str> = registry.exchange_ids().collect();
    let payload = source.fetch_catalog(&exchange_ids).await?;

    if config.use_local_symbol_list {
        cache::write_cached_payload(&config.cache_path, &payload)?;
    }

    Ok(payload)
}

/// Index SPOT catalog entries by canonical symbol.
///
/// An entry referencing an exchange id outside the registry fails the
/// whole load. Duplicate canonical keys are last-write-wins; provider
/// catalogs are assumed de-duplicated per exchange, so each overwrite is
/// logged rather than treated as an error.
fn build_table(
    entries: Vec<CatalogEntry>,
    registry: &ExchangeRegistry,
    aliases: &CurrencyAliasTable,
) -> Result<SymbolTable, SymbolMapError> {
    let mut table = SymbolTable::new();

    for entry in entries {
        if entry.symbol_type != SPOT_CLASS {
            continue;
        }

        let market = registry.market(&entry.exchange_id)?;
        let ticker = compose_ticker(aliases, &entry.asset_id_base, &entry.asset_id_quote, market);
        let symbol = Symbol::crypto(ticker, market);

        if let Some(previous) = table.insert(symbol.clone(), entry.symbol_id.clone()) {
            warn!(
                "Duplicate catalog entry for {}: {} replaces {}",
                symbol, entry.symbol_id, previous
            );
        }
    }

    info!("Loaded {} spot symbols into the table", table.len());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::market;

    fn entry(symbol_id: &str, exchange_id: &str, symbol_type: &str, base: &str, quote: &str) -> CatalogEntry {
        CatalogEntry {
            symbol_id: symbol_id.to_string(),
            exchange_id: exchange_id.to_string(),
            symbol_type: symbol_type.to_string(),
            asset_id_base: base.to_string(),
            asset_id_quote: quote.to_string(),
        }
    }

    #[test]
    fn test_build_table_indexes_spot_entries() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();

        let table = build_table(
            vec![entry("COINBASE_SPOT_BTC_USD", "COINBASE", "SPOT", "BTC", "USD")],
            &registry,
            &aliases,
        )
        .unwrap();

        let key = Symbol::crypto("BTCUSD", market::GDAX);
        assert_eq!(table.get(&key).unwrap(), "COINBASE_SPOT_BTC_USD");
    }

    #[test]
    fn test_non_spot_entries_are_skipped() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();

        let table = build_table(
            vec![
                entry("COINBASE_SPOT_BTC_USD", "COINBASE", "SPOT", "BTC", "USD"),
                entry("COINBASE_FTS_BTC_USD", "COINBASE", "FUTURES", "BTC", "USD"),
                entry("COINBASE_IDX_XYZ_USD", "COINBASE", "INDEX", "XYZ", "USD"),
            ],
            &registry,
            &aliases,
        )
        .unwrap();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_aliases_shape_table_keys() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();

        let table = build_table(
            vec![entry("BITFINEX_SPOT_USDT_USD", "BITFINEX", "SPOT", "USDT", "USD")],
            &registry,
            &aliases,
        )
        .unwrap();

        let key = Symbol::crypto("USTUSD", market::BITFINEX);
        assert_eq!(table.get(&key).unwrap(), "BITFINEX_SPOT_USDT_USD");
        // The unaliased ticker is not a key.
        assert!(!table.contains_key(&Symbol::crypto("USDTUSD", market::BITFINEX)));
    }

    #[test]
    fn test_unknown_exchange_fails_the_whole_load() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();

        let error = build_table(
            vec![
                entry("COINBASE_SPOT_BTC_USD", "COINBASE", "SPOT", "BTC", "USD"),
                entry("KRAKEN_SPOT_BTC_USD", "KRAKEN", "SPOT", "BTC", "USD"),
            ],
            &registry,
            &aliases,
        )
        .unwrap_err();

        assert!(matches!(error, SymbolMapError::UnknownExchange(id) if id == "KRAKEN"));
    }

    #[test]
    fn test_duplicate_canonical_keys_last_write_wins() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();

        let table = build_table(
            vec![
                entry("COINBASE_SPOT_BTC_USD", "COINBASE", "SPOT", "BTC", "USD"),
                entry("COINBASE_SPOT_BTC_USD_V2", "COINBASE", "SPOT", "BTC", "USD"),
            ],
            &registry,
            &aliases,
        )
        .unwrap();

        let key = Symbol::crypto("BTCUSD", market::GDAX);
        assert_eq!(table.get(&key).unwrap(), "COINBASE_SPOT_BTC_USD_V2");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_malformed_payload_is_parse_error() {
        let error = serde_json::from_str::<Vec<CatalogEntry>>("{not json").unwrap_err();
        let error: SymbolMapError = error.into();
        assert!(matches!(error, SymbolMapError::CatalogParse(_)));
    }

    #[test]
    fn test_rebuild_from_same_entries_is_identical() {
        let registry = ExchangeRegistry::default();
        let aliases = CurrencyAliasTable::default();
        let entries = vec![
            entry("COINBASE_SPOT_BTC_USD", "COINBASE", "SPOT", "BTC", "USD"),
            entry("BITFINEX_SPOT_USDT_USD", "BITFINEX", "SPOT", "USDT", "USD"),
        ];

        let first = build_table(entries.clone(), &registry, &aliases).unwrap();
        let second = build_table(entries, &registry, &aliases).unwrap();
        assert_eq!(first, second);
    }
}
