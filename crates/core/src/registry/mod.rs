//! Project-type registry
//!
//! Hosts ask the registry which project type a directory is and which
//! target sources contribute entries for it. Sources are queried in the
//! order they were added and their actions concatenated.

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

use crate::{
    cache::CacheStore,
    error::{Error, Result},
    interfaces::ProjectResolver,
    provider::{DEFAULT_PROJECT_TYPE, JustTargetProvider},
    types::LabeledAction,
};

/// Something that can produce picker entries for a project type
pub trait TargetSource {
    fn name(&self) -> &str;

    fn generate(&mut self, project_type: &str) -> Result<Vec<LabeledAction>>;
}

impl<S, R> TargetSource for JustTargetProvider<S, R>
where
    S: CacheStore,
    R: ProjectResolver,
{
    fn name(&self) -> &str {
        "multi-just"
    }

    fn generate(&mut self, project_type: &str) -> Result<Vec<LabeledAction>> {
        self.get_targets(Some(project_type), None)
    }
}

/// A recognised kind of project and the files that identify it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectType {
    pub name: String,
    pub marker_files: Vec<String>,
}

impl ProjectType {
    pub fn new(name: impl Into<String>, marker_files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            marker_files,
        }
    }

    pub fn matches(&self, dir: &Path) -> bool {
        self.marker_files
            .iter()
            .any(|marker| dir.join(marker).exists())
    }
}

#[derive(Default)]
pub struct ProjectTypeRegistry {
    types: Vec<ProjectType>,
    sources: HashMap<String, Vec<Box<dyn TargetSource>>>,
}

impl std::fmt::Debug for ProjectTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: HashMap<_, Vec<_>> = self
            .sources
            .iter()
            .map(|(ty, sources)| (ty, sources.iter().map(|s| s.name()).collect()))
            .collect();
        f.debug_struct("ProjectTypeRegistry")
            .field("types", &self.types)
            .field("sources", &sources)
            .finish()
    }
}

impl ProjectTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project type. Returns false if the name was already taken,
    /// in which case the existing registration is kept.
    pub fn register_project_type(&mut self, project_type: ProjectType) -> bool {
        if self.project_type(&project_type.name).is_some() {
            return false;
        }
        debug!("Registering project type '{}'", project_type.name);
        self.types.push(project_type);
        true
    }

    pub fn project_type(&self, name: &str) -> Option<&ProjectType> {
        self.types.iter().find(|ty| ty.name == name)
    }

    pub fn project_types(&self) -> &[ProjectType] {
        &self.types
    }

    /// Attach an extra target source to a registered project type
    pub fn add_target_source(
        &mut self,
        project_type: &str,
        source: Box<dyn TargetSource>,
    ) -> Result<()> {
        if self.project_type(project_type).is_none() {
            return Err(Error::UnknownProjectType(project_type.to_string()));
        }
        info!(
            "Adding target source '{}' to project type '{}'",
            source.name(),
            project_type
        );
        self.sources
            .entry(project_type.to_string())
            .or_default()
            .push(source);
        Ok(())
    }

    /// Names of the sources attached to `project_type`
    pub fn source_names(&self, project_type: &str) -> Vec<&str> {
        self.sources
            .get(project_type)
            .map(|sources| sources.iter().map(|s| s.name()).collect())
            .unwrap_or_default()
    }

    /// First registered project type whose markers exist in `dir`
    pub fn detect(&self, dir: &Path) -> Option<&str> {
        self.types
            .iter()
            .find(|ty| ty.matches(dir))
            .map(|ty| ty.name.as_str())
    }

    /// Every entry all sources offer for `project_type`
    pub fn targets_for(&mut self, project_type: &str) -> Result<Vec<LabeledAction>> {
        if self.project_type(project_type).is_none() {
            return Err(Error::UnknownProjectType(project_type.to_string()));
        }

        let mut actions = Vec::new();
        if let Some(sources) = self.sources.get_mut(project_type) {
            for source in sources.iter_mut() {
                actions.extend(source.generate(project_type)?);
            }
        }
        Ok(actions)
    }
}

/// Hook run when the just integration loads: make sure the `just` project
/// type exists and add `provider` as one of its target sources.
pub fn register_just_targets<S, R>(
    registry: &mut ProjectTypeRegistry,
    provider: JustTargetProvider<S, R>,
) -> Result<()>
where
    S: CacheStore + 'static,
    R: ProjectResolver + 'static,
{
    let markers = provider.config().justfile_candidates.clone();
    registry.register_project_type(ProjectType::new(DEFAULT_PROJECT_TYPE, markers));
    registry.add_target_source(DEFAULT_PROJECT_TYPE, Box::new(provider))
}
