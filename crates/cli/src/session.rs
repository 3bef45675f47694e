//! Builds the provider a command works with from the global options

use anyhow::{Context, Result};
use multijust_core::{Config, JustTargetProvider, MarkerProjectResolver, ProjectCache};
use std::path::PathBuf;
use tracing::debug;

use crate::cli::GlobalArgs;

pub type Provider = JustTargetProvider<ProjectCache, MarkerProjectResolver>;

/// Directory the command operates in, made absolute
pub fn working_dir(global: &GlobalArgs) -> Result<PathBuf> {
    let dir = match &global.cwd {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    dir.canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", dir.display()))
}

/// Config discovered from `working_dir`, with command-line overrides applied
pub fn load_config(global: &GlobalArgs, working_dir: &std::path::Path) -> Result<Config> {
    let mut config = Config::discover(working_dir).context("Failed to load configuration")?;

    if let Some(cache_targets) = global.cache_targets {
        config.cache_targets = cache_targets;
    }
    if !global.justfile_candidates.is_empty() {
        config.justfile_candidates = global.justfile_candidates.clone();
    }
    if let Some(ref dir) = global.cache_dir {
        config.cache_dir = Some(dir.clone());
    }

    Ok(config)
}

/// Where persisted cache files live, unless persistence is off
pub fn cache_dir(global: &GlobalArgs, config: &Config) -> Option<PathBuf> {
    if global.no_persist {
        return None;
    }
    config.cache_dir.clone().or_else(|| {
        directories::ProjectDirs::from("", "", "multijust")
            .map(|dirs| dirs.cache_dir().to_path_buf())
    })
}

pub fn open_cache(global: &GlobalArgs, config: &Config) -> Result<ProjectCache> {
    match cache_dir(global, config) {
        Some(dir) => {
            debug!("Using cache directory {}", dir.display());
            ProjectCache::open(dir.clone())
                .with_context(|| format!("Failed to open cache at {}", dir.display()))
        }
        None => Ok(ProjectCache::new(None)),
    }
}

pub fn build_provider(global: &GlobalArgs) -> Result<Provider> {
    let working_dir = working_dir(global)?;
    let config = load_config(global, &working_dir)?;
    let store = open_cache(global, &config)?;
    let resolver = MarkerProjectResolver::new(config.project_markers.clone());

    Ok(JustTargetProvider::new(config, store, resolver, working_dir))
}
