use crate::{
    config::CacheTargets,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".multijust.json", "multijust.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Invalidation policy for the cached target list
    pub cache_targets: CacheTargets,

    /// Basenames tried, in order, when no justfile is given explicitly
    pub justfile_candidates: Vec<String>,

    /// Program used to run a target
    pub just_command: String,

    /// Files or directories whose presence marks a project root
    pub project_markers: Vec<String>,

    /// Where cached target lists are persisted between invocations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_targets: CacheTargets::Auto,
            justfile_candidates: vec!["justfile".to_string()],
            just_command: "just".to_string(),
            project_markers: [".git", ".hg", ".svn", ".projectile", "justfile"]
                .into_iter()
                .map(String::from)
                .collect(),
            cache_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the nearest config file above `start_path`, or the defaults
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cache_targets, CacheTargets::Auto);
        assert_eq!(config.justfile_candidates, vec!["justfile"]);
        assert_eq!(config.just_command, "just");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "cache_targets": true }"#).unwrap();
        assert_eq!(config.cache_targets, CacheTargets::Always);
        assert_eq!(config.justfile_candidates, vec!["justfile"]);
    }

    #[test]
    fn test_candidates_from_file() {
        let config: Config = serde_json::from_str(
            r#"{ "cache_targets": "false", "justfile_candidates": ["Justfile", ".justfile"] }"#,
        )
        .unwrap();
        assert_eq!(config.cache_targets, CacheTargets::Never);
        assert_eq!(config.justfile_candidates, vec!["Justfile", ".justfile"]);
    }

    #[test]
    fn test_save_and_discover_from_nested_dir() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested)?;

        let config = Config {
            cache_targets: CacheTargets::Always,
            just_command: "/usr/local/bin/just".to_string(),
            ..Default::default()
        };
        config.save_to_file(&temp_dir.path().join(".multijust.json"))?;

        let found = Config::discover(&nested)?;
        assert_eq!(found, config);

        Ok(())
    }

    #[test]
    fn test_invalid_file_is_a_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("multijust.json");
        std::fs::write(&path, r#"{ "cache_targets": 3 }"#)?;

        let result = Config::load_from_file(&path);
        assert!(matches!(result, Err(Error::ConfigError(_))));

        Ok(())
    }
}
