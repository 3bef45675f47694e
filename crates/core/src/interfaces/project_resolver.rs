//! Project resolution interface
//!
//! Maps a directory to the project that owns it, which scopes cached data.

use std::path::Path;

use crate::types::ProjectId;

/// Trait for resolving the current project
pub trait ProjectResolver {
    /// Resolve the project containing `dir`, or [`ProjectId::NoProject`]
    fn resolve(&self, dir: &Path) -> ProjectId;
}
