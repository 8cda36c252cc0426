//! Static lookup tables and the provider identifier codec.
//!
//! This module holds the pieces the mapper composes for each translation:
//!
//! ```text
//! "BITFINEX_SPOT_USDT_USD"
//!         │
//!         ▼
//! ┌────────────────────┐   exchange id   ┌──────────────────────┐
//! │  identifier codec  │ ──────────────► │   ExchangeRegistry   │
//! │  (split/validate)  │                 │  (market ↔ exchange) │
//! └────────────────────┘                 └──────────────────────┘
//!         │ base, quote                            │ market
//!         ▼                                        ▼
//! ┌────────────────────┐                 Symbol { "USTUSD",
//! │ CurrencyAliasTable │ ──────────────►          Crypto,
//! │ (per-market codes) │    ticker                "bitfinex" }
//! └────────────────────┘
//! ```
//!
//! The tables are plain owned values built once at process start and passed
//! by reference; nothing here is ambient global state.

mod currency_aliases;
mod exchange_registry;
mod identifier;

pub use currency_aliases::CurrencyAliasTable;
pub use exchange_registry::{market, ExchangeRegistry};
pub use identifier::{compose_ticker, decode, ParsedIdentifier, SPOT_CLASS};
