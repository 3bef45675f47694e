//! Integration test for registering the just target source

use multijust_suite::{
    Config, JustTargetProvider, MarkerProjectResolver, ProjectCache, ProjectTypeRegistry,
    register_just_targets,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_registry_serves_just_targets() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("justfile"), "default: build\nbuild:\n    cargo build\n").unwrap();

    let config = Config::default();
    let resolver = MarkerProjectResolver::new(config.project_markers.clone());
    let provider =
        JustTargetProvider::new(config, ProjectCache::new(None), resolver, root.to_path_buf());

    let mut registry = ProjectTypeRegistry::new();
    register_just_targets(&mut registry, provider).unwrap();

    let project_type = registry.detect(root).unwrap().to_string();
    assert_eq!(project_type, "just");

    let labels: Vec<_> = registry
        .targets_for(&project_type)
        .unwrap()
        .into_iter()
        .map(|a| a.label)
        .collect();
    assert_eq!(labels, vec!["just:default", "just:build"]);
}

#[test]
fn test_detect_ignores_directories_without_justfile() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::default();
    let resolver = MarkerProjectResolver::new(config.project_markers.clone());
    let provider = JustTargetProvider::new(
        config,
        ProjectCache::new(None),
        resolver,
        temp_dir.path().to_path_buf(),
    );

    let mut registry = ProjectTypeRegistry::new();
    register_just_targets(&mut registry, provider).unwrap();

    assert_eq!(registry.detect(temp_dir.path()), None);
    assert!(registry.targets_for("just").unwrap().is_empty());
}
