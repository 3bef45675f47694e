//! Trait seams between the provider and its collaborators

pub mod project_resolver;

pub use project_resolver::ProjectResolver;
