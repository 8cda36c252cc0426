//! The symbol mapper façade.
//!
//! [`CoinApiSymbolMapper`] wires the catalog loader, exchange registry and
//! currency alias table together behind the [`SymbolMapper`] trait.
//! Construction performs the one-shot catalog load (network or disk I/O
//! exactly once); every call afterwards is an in-memory read.

mod traits;

pub use traits::SymbolMapper;

use crate::catalog::{self, CatalogConfig, CatalogSource, CoinApiClient, SymbolTable};
use crate::errors::SymbolMapError;
use crate::models::{AssetKind, Symbol};
use crate::resolver::{compose_ticker, decode, CurrencyAliasTable, ExchangeRegistry};

/// Symbol mapper backed by the CoinAPI symbol catalog.
#[derive(Debug)]
pub struct CoinApiSymbolMapper {
    registry: ExchangeRegistry,
    aliases: CurrencyAliasTable,
    table: SymbolTable,
}

impl CoinApiSymbolMapper {
    /// Load a mapper against the REST endpoint described by `config`.
    ///
    /// A failed load is fatal: the mapper is never usable with a partial
    /// table.
    pub async fn load(
        config: &CatalogConfig,
        registry: ExchangeRegistry,
        aliases: CurrencyAliasTable,
    ) -> Result<Self, SymbolMapError> {
        let client = CoinApiClient::new(config.base_url.clone(), config.api_key.clone());
        Self::load_with_source(config, &client, registry, aliases).await
    }

    /// Load a mapper from an arbitrary catalog source.
    pub async fn load_with_source<S: CatalogSource>(
        config: &CatalogConfig,
        source: &S,
        registry: ExchangeRegistry,
        aliases: CurrencyAliasTable,
    ) -> Result<Self, SymbolMapError> {
        let table = catalog::load_symbol_table(config, source, &registry, &aliases).await?;
        Ok(Self {
            registry,
            aliases,
            table,
        })
    }

    /// Rebuild the symbol table from the catalog source.
    ///
    /// The table is otherwise immutable for the mapper's lifetime; picking
    /// up catalog changes requires this or a new instance.
    pub async fn reload<S: CatalogSource>(
        &mut self,
        config: &CatalogConfig,
        source: &S,
    ) -> Result<(), SymbolMapError> {
        self.table =
            catalog::load_symbol_table(config, source, &self.registry, &self.aliases).await?;
        Ok(())
    }

    /// Number of symbols in the loaded table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when the loaded table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl SymbolMapper for CoinApiSymbolMapper {
    fn provider_symbol(&self, symbol: &Symbol) -> Result<&str, SymbolMapError> {
        self.table
            .get(symbol)
            .map(String::as_str)
            .ok_or_else(|| SymbolMapError::SymbolNotFound(symbol.clone()))
    }

    fn canonical_symbol(
        &self,
        raw: &str,
        _kind: AssetKind,
        _market: &str,
    ) -> Result<Symbol, SymbolMapError> {
        let parsed = decode(raw)?;
        let market = self.registry.market(&parsed.exchange_id)?;
        let ticker = compose_ticker(&self.aliases, &parsed.base, &parsed.quote, market);
        Ok(Symbol::crypto(ticker, market))
    }

    fn exchange_id(&self, market: &str) -> Option<&str> {
        self.registry.exchange_id(market)
    }
}
