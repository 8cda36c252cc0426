//! Value types shared across the crate.

mod catalog;
mod symbol;

pub use catalog::CatalogEntry;
pub use symbol::{AssetKind, Symbol};
