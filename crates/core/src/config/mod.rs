//! Configuration management for multijust

mod cache_targets;
mod settings;

pub use cache_targets::CacheTargets;
pub use settings::{CONFIG_FILE_NAMES, Config};
