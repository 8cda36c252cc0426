//! Canonical market to provider exchange id registry.

use std::collections::HashMap;

use crate::errors::SymbolMapError;

/// Canonical market name constants.
pub mod market {
    /// Coinbase Pro.
    pub const GDAX: &str = "gdax";
    /// Bitfinex.
    pub const BITFINEX: &str = "bitfinex";
}

/// Bijective mapping between canonical market names and provider exchange
/// ids.
///
/// Built once from a fixed pair list and never mutated at runtime. The
/// loader asks it which exchange catalogs to request; the codec asks it
/// which market a decoded exchange id belongs to.
#[derive(Debug, Clone)]
pub struct ExchangeRegistry {
    by_market: HashMap<String, String>,
    by_exchange: HashMap<String, String>,
    // Declaration order of the pair list, so catalog requests and logs
    // are reproducible across runs.
    ordered_exchange_ids: Vec<String>,
}

impl Default for ExchangeRegistry {
    /// The built-in market set: Coinbase Pro and Bitfinex.
    fn default() -> Self {
        Self::new(&[(market::GDAX, "COINBASE"), (market::BITFINEX, "BITFINEX")])
    }
}

impl ExchangeRegistry {
    /// Build a registry from (market, exchange id) pairs.
    ///
    /// # Panics
    ///
    /// Panics when a market or an exchange id appears twice. The pair list
    /// is fixed program data, so a duplicate is a programming error rather
    /// than a runtime fault.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        let mut by_market = HashMap::new();
        let mut by_exchange = HashMap::new();
        let mut ordered_exchange_ids = Vec::with_capacity(pairs.len());
        for (market, exchange_id) in pairs {
            let previous = by_market.insert((*market).to_string(), (*exchange_id).to_string());
            assert!(previous.is_none(), "duplicate market in registry: {market}");
            let previous = by_exchange.insert((*exchange_id).to_string(), (*market).to_string());
            assert!(
                previous.is_none(),
                "duplicate exchange id in registry: {exchange_id}"
            );
            ordered_exchange_ids.push((*exchange_id).to_string());
        }
        Self {
            by_market,
            by_exchange,
            ordered_exchange_ids,
        }
    }

    /// Provider exchange id for a canonical market.
    ///
    /// Absence is not an error: callers probe markets for support.
    pub fn exchange_id(&self, market: &str) -> Option<&str> {
        self.by_market.get(market).map(String::as_str)
    }

    /// Canonical market for a provider exchange id.
    pub fn market(&self, exchange_id: &str) -> Result<&str, SymbolMapError> {
        self.by_exchange
            .get(exchange_id)
            .map(String::as_str)
            .ok_or_else(|| SymbolMapError::UnknownExchange(exchange_id.to_string()))
    }

    /// All registered exchange ids, in the order the pairs were declared.
    pub fn exchange_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.ordered_exchange_ids.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_bijection() {
        let registry = ExchangeRegistry::default();
        assert_eq!(registry.exchange_id(market::GDAX), Some("COINBASE"));
        assert_eq!(registry.exchange_id(market::BITFINEX), Some("BITFINEX"));
        assert_eq!(registry.market("COINBASE").unwrap(), market::GDAX);
        assert_eq!(registry.market("BITFINEX").unwrap(), market::BITFINEX);
    }

    #[test]
    fn test_unmapped_market_is_none() {
        let registry = ExchangeRegistry::default();
        assert_eq!(registry.exchange_id("kraken"), None);
    }

    #[test]
    fn test_unknown_exchange_id_is_error() {
        let registry = ExchangeRegistry::default();
        let error = registry.market("ZZZZ").unwrap_err();
        assert!(matches!(error, SymbolMapError::UnknownExchange(id) if id == "ZZZZ"));
    }

    #[test]
    fn test_exchange_ids_follow_declaration_order() {
        let registry = ExchangeRegistry::default();
        let ids: Vec<&str> = registry.exchange_ids().collect();
        assert_eq!(ids, vec!["COINBASE", "BITFINEX"]);

        let reversed = ExchangeRegistry::new(&[("bitfinex", "BITFINEX"), ("gdax", "COINBASE")]);
        let ids: Vec<&str> = reversed.exchange_ids().collect();
        assert_eq!(ids, vec!["BITFINEX", "COINBASE"]);
    }

    #[test]
    #[should_panic(expected = "duplicate exchange id")]
    fn test_duplicate_exchange_id_panics() {
        ExchangeRegistry::new(&[("gdax", "COINBASE"), ("other", "COINBASE")]);
    }

    #[test]
    #[should_panic(expected = "duplicate market")]
    fn test_duplicate_market_panics() {
        ExchangeRegistry::new(&[("gdax", "COINBASE"), ("gdax", "BITFINEX")]);
    }
}
