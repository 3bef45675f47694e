//! Cached just target provider
//!
//! Resolves the justfile for the current project, serves its target list
//! through the project cache and turns every target into a labeled action
//! for the picker.

mod policy;

pub use policy::{InvalidationPolicy, RACY_WINDOW};

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{
    cache::{CacheStore, CacheVariable},
    command::JustCommand,
    config::Config,
    error::{Error, Result},
    interfaces::ProjectResolver,
    patterns::extract_targets,
    types::{LabeledAction, ProjectId},
};

/// Project type used when the caller does not name one
pub const DEFAULT_PROJECT_TYPE: &str = "just";

/// Cache key under which each project's target list is stored
pub const TARGETS_CACHE_KEY: &str = "multi-just-targets";

/// Inventory metadata for the target list entry
pub const TARGETS_CACHE_VARIABLE: CacheVariable = CacheVariable {
    key: TARGETS_CACHE_KEY,
    title: "Just targets",
    category: "multijust",
    description: "Target names extracted from the project's justfile",
    hidden: true,
};

/// Serves a project's just targets as labeled actions, backed by a cache store
pub struct JustTargetProvider<S, R> {
    config: Config,
    store: S,
    resolver: R,
    working_dir: PathBuf,
}

impl<S: CacheStore, R: ProjectResolver> JustTargetProvider<S, R> {
    pub fn new(config: Config, store: S, resolver: R, working_dir: PathBuf) -> Self {
        Self {
            config,
            store,
            resolver,
            working_dir,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn project(&self) -> ProjectId {
        self.resolver.resolve(&self.working_dir)
    }

    pub fn policy(&self) -> InvalidationPolicy {
        self.config.cache_targets.into()
    }

    /// Find the first configured candidate that exists, looking in the
    /// working directory and then at the project root.
    pub fn resolve_justfile(&self) -> Option<PathBuf> {
        let project = self.project();
        let mut dirs = vec![self.working_dir.as_path()];
        if let Some(root) = project.root() {
            if root != self.working_dir {
                dirs.push(root);
            }
        }

        let found = dirs.into_iter().find_map(|dir| {
            self.config
                .justfile_candidates
                .iter()
                .map(|name| dir.join(name))
                .find(|path| path.is_file())
        });

        match &found {
            Some(path) => debug!("Using justfile {}", path.display()),
            None => debug!(
                "No justfile among {:?} in {}",
                self.config.justfile_candidates,
                self.working_dir.display()
            ),
        }
        found
    }

    /// Target names for `file_path` (or the discovered justfile), served
    /// from the cache when the policy allows.
    ///
    /// `Ok(None)` means no justfile could be found; an explicit path is
    /// never existence-checked, so a missing one surfaces as an IO error.
    pub fn target_names(
        &mut self,
        file_path: Option<&Path>,
    ) -> Result<Option<(PathBuf, Vec<String>)>> {
        let file = match file_path {
            Some(path) => self.working_dir.join(path),
            None => match self.resolve_justfile() {
                Some(path) => path,
                None => return Ok(None),
            },
        };

        let project = self.project();
        let policy = self.policy();
        debug!("Looking up targets for {} with {:?}", project, policy);

        let targets: Vec<String> = self.store.get_or_compute_from(
            &project,
            TARGETS_CACHE_KEY,
            Some(&file),
            policy.predicate(&file),
            || {
                info!("Parsing {}", file.display());
                extract_targets(&file)
            },
        )?;

        Ok(Some((file, targets)))
    }

    /// Labeled actions for every public target, in file order.
    ///
    /// `project_type` defaults to [`DEFAULT_PROJECT_TYPE`]. An empty list
    /// means there is nothing to offer, not that something went wrong.
    pub fn get_targets(
        &mut self,
        project_type: Option<&str>,
        file_path: Option<&Path>,
    ) -> Result<Vec<LabeledAction>> {
        let project_type = project_type.unwrap_or(DEFAULT_PROJECT_TYPE);

        let Some((file, targets)) = self.target_names(file_path)? else {
            return Ok(Vec::new());
        };

        Ok(targets
            .iter()
            .map(|target| {
                LabeledAction::new(project_type, target, self.build_command(&file, target))
            })
            .collect())
    }

    /// Look up a single target by name
    pub fn find_target(
        &mut self,
        target: &str,
        project_type: Option<&str>,
        file_path: Option<&Path>,
    ) -> Result<LabeledAction> {
        self.get_targets(project_type, file_path)?
            .into_iter()
            .find(|action| action.target == target)
            .ok_or_else(|| Error::NoSuchTarget(target.to_string()))
    }

    /// Command that runs `target` from `justfile`
    pub fn build_command(&self, justfile: &Path, target: &str) -> JustCommand {
        let command =
            JustCommand::new(self.config.just_command.as_str(), target).with_justfile(justfile);
        match justfile.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                command.with_working_dir(dir.to_string_lossy().into_owned())
            }
            _ => command,
        }
    }
}
