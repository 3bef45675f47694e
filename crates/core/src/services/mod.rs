//! Default implementations of the collaborator interfaces

pub mod marker_project_resolver;

pub use marker_project_resolver::{FixedProjectResolver, MarkerProjectResolver};
