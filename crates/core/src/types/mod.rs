pub mod action;
pub mod project;

pub use action::{LABEL_SEPARATOR, LabeledAction};
pub use project::ProjectId;
