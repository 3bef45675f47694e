use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

use crate::{error::Result, types::ProjectId};

use super::entry::CacheEntry;

/// Minimal capability a per-project cache must offer.
///
/// The store owns its entries; callers only ever go through
/// [`CacheStore::get_or_compute`], never touching an entry directly.
pub trait CacheStore {
    /// Like [`CacheStore::get_or_compute`], but a freshly computed entry is
    /// stamped with the modification time `source` had before `compute` ran.
    fn get_or_compute_from<T, V, F>(
        &mut self,
        scope: &ProjectId,
        key: &str,
        source: Option<&Path>,
        is_valid: V,
        compute: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        V: FnOnce(&CacheEntry) -> bool,
        F: FnOnce() -> Result<T>;

    /// Return the value cached under `(scope, key)` when `is_valid` accepts
    /// the stored entry, otherwise run `compute`, store its output and
    /// return it. Errors from `compute` propagate and leave the store as is.
    fn get_or_compute<T, V, F>(
        &mut self,
        scope: &ProjectId,
        key: &str,
        is_valid: V,
        compute: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        V: FnOnce(&CacheEntry) -> bool,
        F: FnOnce() -> Result<T>,
    {
        self.get_or_compute_from(scope, key, None, is_valid, compute)
    }

    /// Drop a single entry. Returns whether anything was removed.
    fn invalidate(&mut self, scope: &ProjectId, key: &str) -> Result<bool>;

    /// Drop every entry in every scope
    fn clear(&mut self) -> Result<()>;
}

/// Modification time of `path`, if it can be read
pub fn modification_time(path: &Path) -> Option<SystemTime> {
    match std::fs::metadata(path).and_then(|metadata| metadata.modified()) {
        Ok(modified) => Some(modified),
        Err(e) => {
            debug!("Cannot read modification time of {}: {}", path.display(), e);
            None
        }
    }
}

/// Build an entry stamped with the current time
pub(crate) fn stamp<T: Serialize>(
    value: &T,
    source_modified: Option<SystemTime>,
) -> Result<CacheEntry> {
    Ok(CacheEntry {
        value: serde_json::to_value(value)?,
        recorded_at: SystemTime::now(),
        source_modified,
    })
}
