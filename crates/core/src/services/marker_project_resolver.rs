//! Marker-file based project resolver
//!
//! Walks up the directory tree until a directory holds one of the
//! configured marker entries (`.git`, `justfile`, ...).

use crate::{interfaces::ProjectResolver, types::ProjectId};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct MarkerProjectResolver {
    markers: Vec<String>,
}

impl MarkerProjectResolver {
    pub fn new(markers: Vec<String>) -> Self {
        Self { markers }
    }

    fn find_project_root(&self, from: &Path) -> Option<PathBuf> {
        let mut current = if from.is_file() {
            from.parent()?.to_path_buf()
        } else {
            from.to_path_buf()
        };

        loop {
            if self
                .markers
                .iter()
                .any(|marker| current.join(marker).exists())
            {
                return Some(current);
            }

            if !current.pop() {
                break;
            }
        }

        None
    }
}

impl ProjectResolver for MarkerProjectResolver {
    fn resolve(&self, dir: &Path) -> ProjectId {
        match self.find_project_root(dir) {
            Some(root) => {
                debug!("Resolved project root {}", root.display());
                ProjectId::Project(root)
            }
            None => {
                debug!("No project found above {}", dir.display());
                ProjectId::NoProject
            }
        }
    }
}

/// Resolver that always answers with the same project; useful when the
/// host already knows which project is active.
pub struct FixedProjectResolver(pub ProjectId);

impl ProjectResolver for FixedProjectResolver {
    fn resolve(&self, _dir: &Path) -> ProjectId {
        self.0.clone()
    }
}
