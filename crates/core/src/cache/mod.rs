//! Per-project caching of computed values

pub mod entry;
pub mod project_cache;
pub mod store;

pub use entry::{CacheEntry, CacheVariable};
pub use project_cache::ProjectCache;
pub use store::{CacheStore, modification_time};
