//! Local catalog cache file handling and the staleness window.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Days, Utc};
use log::debug;

use crate::errors::SymbolMapError;

/// Decide whether a cache file created at `created` is read instead of
/// fetching the catalog remotely, evaluated against the current UTC date.
///
/// The cached payload is used only when the file's creation date is
/// strictly before yesterday. Note this is the inverse of a conventional
/// TTL: a *fresh* file triggers a refetch. The comparison is kept exactly
/// as-is and pinned by the tests below, so any change to the policy shows
/// up as an explicit test edit.
pub(crate) fn use_cached_catalog(created: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    match now.date_naive().checked_sub_days(Days::new(1)) {
        Some(yesterday) => created.date_naive() < yesterday,
        None => false,
    }
}

/// Read the cached payload when the file exists and the staleness window
/// says to use it.
///
/// Returns `Ok(None)` when the loader should fetch remotely instead: the
/// file is missing or its creation date falls inside the refetch window.
pub(crate) fn read_cached_payload(
    path: &Path,
    now: DateTime<Utc>,
) -> Result<Option<String>, SymbolMapError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };

    // Creation time is not available on every filesystem; fall back to the
    // modification time, which for a write-once cache file is the same.
    let created = metadata.created().or_else(|_| metadata.modified())?;

    if use_cached_catalog(DateTime::<Utc>::from(created), now) {
        debug!("Reading symbol catalog from cache file {}", path.display());
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

/// Persist the raw catalog payload after a successful remote fetch.
pub(crate) fn write_cached_payload(path: &Path, payload: &str) -> Result<(), SymbolMapError> {
    fs::write(path, payload)?;
    debug!("Wrote symbol catalog cache file {}", path.display());
    Ok(())
}
