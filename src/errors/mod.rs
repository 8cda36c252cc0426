//! Error types for the symbol mapping crate.
//!
//! All operations return [`SymbolMapError`]. Construction-time failures
//! (catalog fetch, parse, unknown exchange during the load) are fatal: no
//! partial symbol table is ever exposed. Lookup-time failures are per-call
//! and never mutate the table.

use thiserror::Error;

use crate::models::Symbol;

/// Errors surfaced by the symbol mapper and its catalog loader.
#[derive(Error, Debug)]
pub enum SymbolMapError {
    /// The provider identifier does not split into exactly four
    /// '_'-delimited segments.
    #[error("Malformed provider identifier: {0}")]
    MalformedIdentifier(String),

    /// The identifier has the right shape but its instrument class segment
    /// is not "SPOT".
    #[error("Unsupported instrument class in identifier: {0}")]
    UnsupportedInstrumentClass(String),

    /// The exchange id is not present in the registry.
    #[error("Unknown exchange id: {0}")]
    UnknownExchange(String),

    /// The canonical symbol is absent from the loaded table.
    /// A miss never triggers a live re-fetch.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(Symbol),

    /// Network failure while fetching the symbol catalog.
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(#[from] reqwest::Error),

    /// The catalog payload is not in the expected shape.
    #[error("Catalog parse failed: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Disk I/O failure while reading or writing the local catalog cache.
    #[error("Catalog cache I/O failed: {0}")]
    CacheIo(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::market;

    #[test]
    fn test_error_display() {
        let error = SymbolMapError::MalformedIdentifier("ABC_SPOT_X".to_string());
        assert_eq!(
            format!("{}", error),
            "Malformed provider identifier: ABC_SPOT_X"
        );

        let error = SymbolMapError::UnknownExchange("ZZZZ".to_string());
        assert_eq!(format!("{}", error), "Unknown exchange id: ZZZZ");

        let error = SymbolMapError::SymbolNotFound(Symbol::crypto("BTCUSD", market::GDAX));
        assert_eq!(format!("{}", error), "Symbol not found: BTCUSD (Crypto) on gdax");
    }
}
