use std::fmt;

use serde::{Deserialize, Serialize};

/// Asset classification.
///
/// The catalog loader only ever produces [`AssetKind::Crypto`]; the other
/// kinds exist so consumers can pass the classification through without a
/// separate enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    #[default]
    Crypto,
    Equity,
    FxRate,
}

/// Canonical, market-qualified instrument identifier.
///
/// Independent of any provider's naming. Equality and hashing cover all
/// three fields; this is the symbol table's key and it is immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Base and quote currency concatenated with no separator, e.g. "BTCUSD".
    pub ticker: String,
    /// Instrument classification.
    pub kind: AssetKind,
    /// Canonical market name, e.g. "gdax" or "bitfinex".
    pub market: String,
}

impl Symbol {
    /// Create a crypto symbol for the given market.
    pub fn crypto(ticker: impl Into<String>, market: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            kind: AssetKind::Crypto,
            market: market.into(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}) on {}", self.ticker, self.kind, self.market)
    }
}
