use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::{
    cache::{CacheEntry, modification_time},
    config::CacheTargets,
};

/// How close to the moment of recording a source modification time may be
/// before the entry can no longer vouch for the content it was parsed from.
/// Covers coarse filesystem timestamps that lag the wall clock.
pub const RACY_WINDOW: Duration = Duration::from_secs(2);

/// When a cached target list may be reused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationPolicy {
    /// Never reuse; every lookup re-parses
    AlwaysFresh,
    /// Parse once, reuse forever
    AlwaysCached,
    /// Reuse while the file's modification time still matches the one
    /// recorded before it was parsed
    ModificationTime,
}

impl From<CacheTargets> for InvalidationPolicy {
    fn from(setting: CacheTargets) -> Self {
        match setting {
            CacheTargets::Auto => InvalidationPolicy::ModificationTime,
            CacheTargets::Always => InvalidationPolicy::AlwaysCached,
            CacheTargets::Never => InvalidationPolicy::AlwaysFresh,
        }
    }
}

impl InvalidationPolicy {
    /// Build the validity predicate handed to the cache store for `file`
    pub fn predicate(self, file: &Path) -> impl FnOnce(&CacheEntry) -> bool + '_ {
        move |entry: &CacheEntry| match self {
            InvalidationPolicy::AlwaysFresh => false,
            InvalidationPolicy::AlwaysCached => true,
            InvalidationPolicy::ModificationTime => unchanged_since_recorded(file, entry),
        }
    }
}

/// True when `file` still carries the modification time recorded in `entry`
/// and that time was settled when the entry was written. Entries without a
/// recorded time, and files whose time cannot be read, count as changed.
fn unchanged_since_recorded(file: &Path, entry: &CacheEntry) -> bool {
    let Some(recorded) = entry.source_modified else {
        return false;
    };
    if is_racy(recorded, entry.recorded_at) {
        debug!("Modification time of {} too recent to trust", file.display());
        return false;
    }
    modification_time(file) == Some(recorded)
}

/// An edit landing in the same timestamp tick as the parse would leave the
/// modification time unchanged, so such entries are never trusted.
fn is_racy(source_modified: SystemTime, recorded_at: SystemTime) -> bool {
    match recorded_at.duration_since(source_modified) {
        Ok(age) => age < RACY_WINDOW,
        Err(_) => true,
    }
}
