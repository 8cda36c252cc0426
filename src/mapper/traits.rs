use crate::errors::SymbolMapError;
use crate::models::{AssetKind, Symbol};

/// Bidirectional symbol translation. This trait is the entire boundary
/// consumers see; the catalog loader and lookup table stay behind it.
///
/// Implementations hold an immutable symbol table after construction, so
/// every method is safe to call concurrently.
pub trait SymbolMapper: Send + Sync {
    /// Provider symbol id for a canonical symbol.
    ///
    /// Pure table lookup. A miss returns
    /// [`SymbolNotFound`](SymbolMapError::SymbolNotFound) and never
    /// triggers a live re-fetch.
    fn provider_symbol(&self, symbol: &Symbol) -> Result<&str, SymbolMapError>;

    /// Canonical symbol for a raw provider identifier.
    ///
    /// Re-derives everything from the string alone and never consults the
    /// table. The `kind` and `market` arguments are caller hints retained
    /// for signature compatibility with other mappers; both are re-derived
    /// from the identifier itself, and non-spot classes are rejected at
    /// decode.
    fn canonical_symbol(
        &self,
        raw: &str,
        kind: AssetKind,
        market: &str,
    ) -> Result<Symbol, SymbolMapError>;

    /// Provider exchange id for a canonical market, `None` when the market
    /// is not mapped. Callers probe markets for support, so absence is not
    /// an error.
    fn exchange_id(&self, market: &str) -> Option<&str>;
}
