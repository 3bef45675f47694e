use serde::Serialize;

use crate::command::JustCommand;

/// Separator between the project-type prefix and the target name in labels
pub const LABEL_SEPARATOR: &str = ":";

/// A selectable entry handed to the picker: display label plus the command
/// that runs the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledAction {
    pub label: String,
    pub target: String,
    pub command: JustCommand,
}

impl LabeledAction {
    pub fn new(project_type: &str, target: &str, command: JustCommand) -> Self {
        Self {
            label: format!("{project_type}{LABEL_SEPARATOR}{target}"),
            target: target.to_string(),
            command,
        }
    }
}
