use serde::Deserialize;

/// Raw catalog record as returned by the provider's `/v1/symbols` endpoint.
///
/// Transient: consumed once while the symbol table is built, then dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Opaque provider symbol id, e.g. "COINBASE_SPOT_BTC_USD".
    pub symbol_id: String,
    /// Provider exchange id, e.g. "COINBASE".
    pub exchange_id: String,
    /// Instrument class, e.g. "SPOT" or "FUTURES".
    pub symbol_type: String,
    /// Base currency in provider naming. Absent for some non-spot classes.
    #[serde(default)]
    pub asset_id_base: String,
    /// Quote currency in provider naming. Absent for some non-spot classes.
    #[serde(default)]
    pub asset_id_quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "symbol_id": "COINBASE_SPOT_BTC_USD",
            "exchange_id": "COINBASE",
            "symbol_type": "SPOT",
            "asset_id_base": "BTC",
            "asset_id_quote": "USD"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.symbol_id, "COINBASE_SPOT_BTC_USD");
        assert_eq!(entry.exchange_id, "COINBASE");
        assert_eq!(entry.symbol_type, "SPOT");
        assert_eq!(entry.asset_id_base, "BTC");
        assert_eq!(entry.asset_id_quote, "USD");
    }

    #[test]
    fn test_missing_asset_ids_default_to_empty() {
        let json = r#"{
            "symbol_id": "COINBASE_IDX_XYZ",
            "exchange_id": "COINBASE",
            "symbol_type": "INDEX"
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert!(entry.asset_id_base.is_empty());
        assert!(entry.asset_id_quote.is_empty());
    }
}
