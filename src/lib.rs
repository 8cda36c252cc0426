//! CoinAPI Symbol Mapping Crate
//!
//! Bidirectional translation between canonical, market-qualified crypto
//! symbols and CoinAPI symbol ids, with per-market currency alias
//! normalization and a local catalog cache refreshed at most once per
//! calendar day.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  Domain Layer    | --> |  CoinApiSymbolMapper |  (facade)
//! +------------------+     +----------------------+
//!                              |              |
//!                 construction |              | lookups
//!                              v              v
//!                    +------------------+  +------------------+
//!                    |  Catalog Loader  |  | Identifier Codec |
//!                    | (cache or fetch) |  |  (decode only)   |
//!                    +------------------+  +------------------+
//!                              |              |
//!                              v              v
//!                    +------------------------------------+
//!                    | ExchangeRegistry, CurrencyAliases  |
//!                    |     (immutable lookup tables)      |
//!                    +------------------------------------+
//! ```
//!
//! Construction performs network or disk I/O exactly once to build the
//! symbol table; the table is immutable afterwards and safe for concurrent
//! reads. Reverse lookups (provider id to canonical symbol) never touch
//! the table and always re-derive from the raw string.
//!
//! # Core Types
//!
//! - [`Symbol`] - Canonical instrument identifier (ticker, kind, market)
//! - [`CoinApiSymbolMapper`] - The facade implementing [`SymbolMapper`]
//! - [`CatalogConfig`] - API key, cache mode and cache file location
//! - [`ExchangeRegistry`] - Market to exchange id bijection
//! - [`CurrencyAliasTable`] - Per-market currency code overrides
//!
//! # Example
//!
//! ```ignore
//! use coinapi_symbols::{
//!     CatalogConfig, CoinApiSymbolMapper, CurrencyAliasTable, ExchangeRegistry, Symbol,
//!     SymbolMapper, resolver::market,
//! };
//!
//! let config = CatalogConfig::new("my-api-key");
//! let mapper = CoinApiSymbolMapper::load(
//!     &config,
//!     ExchangeRegistry::default(),
//!     CurrencyAliasTable::default(),
//! )
//! .await?;
//!
//! let symbol = Symbol::crypto("BTCUSD", market::GDAX);
//! let provider_id = mapper.provider_symbol(&symbol)?;
//! // provider_id == "COINBASE_SPOT_BTC_USD"
//! ```

pub mod catalog;
pub mod errors;
pub mod mapper;
pub mod models;
pub mod resolver;

// Re-export the public surface
pub use catalog::{CatalogConfig, CatalogSource, CoinApiClient, SymbolTable, DEFAULT_BASE_URL};
pub use errors::SymbolMapError;
pub use mapper::{CoinApiSymbolMapper, SymbolMapper};
pub use models::{AssetKind, CatalogEntry, Symbol};
pub use resolver::{CurrencyAliasTable, ExchangeRegistry, ParsedIdentifier};
