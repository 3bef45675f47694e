use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A cached value together with the time it was produced.
///
/// `source_modified` is the modification time of the file the value was
/// derived from, read before the file itself was read. Entries computed
/// without a source file leave it empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub recorded_at: SystemTime,
    #[serde(default)]
    pub source_modified: Option<SystemTime>,
}

/// Descriptive metadata for a cache variable, shown by inventory listings.
/// Not consulted by the store itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheVariable {
    pub key: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub hidden: bool,
}
