use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Scope that cached data belongs to.
///
/// `NoProject` is a real scope: lookups outside any project still cache,
/// they just share one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectId {
    Project(PathBuf),
    NoProject,
}

impl ProjectId {
    pub fn root(&self) -> Option<&Path> {
        match self {
            ProjectId::Project(root) => Some(root),
            ProjectId::NoProject => None,
        }
    }

    /// Stable string form used to name persisted cache files
    pub fn cache_key(&self) -> String {
        match self {
            ProjectId::Project(root) => format!("project:{}", root.display()),
            ProjectId::NoProject => "no-project".to_string(),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Project(root) => write!(f, "{}", root.display()),
            ProjectId::NoProject => write!(f, "<no project>"),
        }
    }
}
