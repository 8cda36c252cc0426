//! Parsing of provider symbol-id strings.
//!
//! Provider symbol ids are four '_'-delimited segments:
//! `EXCHANGE_CLASS_BASE_QUOTE`, e.g. "COINBASE_SPOT_BTC_USD". Only the
//! "SPOT" class is supported.

use crate::errors::SymbolMapError;
use crate::resolver::CurrencyAliasTable;

/// The only instrument class the codec accepts. Futures, options and
/// perpetuals are rejected.
pub const SPOT_CLASS: &str = "SPOT";

/// Structured view of a provider symbol id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedIdentifier {
    /// Provider exchange id, e.g. "COINBASE".
    pub exchange_id: String,
    /// Base currency in provider naming.
    pub base: String,
    /// Quote currency in provider naming.
    pub quote: String,
}

/// Split a raw provider symbol id into its structured fields.
pub fn decode(raw: &str) -> Result<ParsedIdentifier, SymbolMapError> {
    let parts: Vec<&str> = raw.split('_').collect();
    if parts.len() != 4 {
        return Err(SymbolMapError::MalformedIdentifier(raw.to_string()));
    }
    if parts[1] != SPOT_CLASS {
        return Err(SymbolMapError::UnsupportedInstrumentClass(raw.to_string()));
    }
    Ok(ParsedIdentifier {
        exchange_id: parts[0].to_string(),
        base: parts[2].to_string(),
        quote: parts[3].to_string(),
    })
}

/// Compose the canonical ticker for a base/quote pair on a market.
///
/// Both codes are alias-resolved for the market and concatenated with no
/// separator. The base/quote boundary is not recoverable from the result,
/// so no inverse of this function exists; reverse translation always goes
/// back through [`decode`] on the raw provider id.
pub fn compose_ticker(
    aliases: &CurrencyAliasTable,
    base: &str,
    quote: &str,
    market: &str,
) -> String {
    format!(
        "{}{}",
        aliases.resolve(base, market),
        aliases.resolve(quote, market)
    )
}
