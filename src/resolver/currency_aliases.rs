//! Per-market currency code aliases.
//!
//! Some exchanges name currencies differently from the canonical codes this
//! system uses (Bitfinex calls Tether "UST" where the provider reports
//! "USDT"). The alias table normalizes provider codes per market.

use std::collections::HashMap;

use crate::resolver::market;

/// Market-scoped mapping from provider currency codes to canonical codes.
///
/// Read-only after construction. Absence of an entry means the code is
/// already canonical, so [`resolve`](Self::resolve) is total and never
/// fails.
#[derive(Debug, Clone)]
pub struct CurrencyAliasTable {
    overrides: HashMap<String, HashMap<String, String>>,
}

impl Default for CurrencyAliasTable {
    /// The built-in alias set. Only Bitfinex renames currencies today.
    fn default() -> Self {
        Self::new(&[
            (market::BITFINEX, "ANIO", "NIO"),
            (market::BITFINEX, "BCHSV", "BSV"),
            (market::BITFINEX, "DASH", "DSH"),
            (market::BITFINEX, "IOTA", "IOT"),
            (market::BITFINEX, "MANA", "MNA"),
            (market::BITFINEX, "PKGO", "GOT"),
            (market::BITFINEX, "QTUM", "QTM"),
            (market::BITFINEX, "USDT", "UST"),
            (market::BITFINEX, "YOYOW", "YYW"),
        ])
    }
}

impl CurrencyAliasTable {
    /// Build a table from (market, provider code, canonical code) triples.
    pub fn new(entries: &[(&str, &str, &str)]) -> Self {
        let mut overrides: HashMap<String, HashMap<String, String>> = HashMap::new();
        for (market, provider_code, canonical_code) in entries {
            overrides
                .entry((*market).to_string())
                .or_default()
                .insert((*provider_code).to_string(), (*canonical_code).to_string());
        }
        Self { overrides }
    }

    /// Resolve a provider currency code for the given market.
    ///
    /// Returns the canonical override when one exists, otherwise the code
    /// unchanged.
    pub fn resolve<'a>(&'a self, code: &'a str, market: &str) -> &'a str {
        self.overrides
            .get(market)
            .and_then(|codes| codes.get(code))
            .map(String::as_str)
            .unwrap_or(code)
    }
}
