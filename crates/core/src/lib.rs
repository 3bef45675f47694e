//! multijust - justfile targets for command pickers
//!
//! This crate provides functionality to:
//! - Extract target names from justfile header lines, skipping private ones
//! - Cache each project's target list with a configurable invalidation policy
//! - Turn targets into labeled, runnable actions and register them with a
//!   project-type registry
pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod patterns;
pub mod provider;
pub mod registry;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use cache::{CacheEntry, CacheStore, ProjectCache};
pub use command::JustCommand;
pub use config::{CacheTargets, Config};
pub use interfaces::ProjectResolver;
pub use patterns::{extract_targets, scan_header_targets};
pub use provider::{
    DEFAULT_PROJECT_TYPE, InvalidationPolicy, JustTargetProvider, TARGETS_CACHE_KEY,
};
pub use registry::{ProjectType, ProjectTypeRegistry, TargetSource, register_just_targets};
pub use services::MarkerProjectResolver;
