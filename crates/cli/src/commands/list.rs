use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::{cli::GlobalArgs, session::build_provider};

pub fn list_command(
    global: &GlobalArgs,
    justfile: Option<&Path>,
    project_type: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut provider = build_provider(global)?;
    let actions = provider
        .get_targets(project_type, justfile)
        .context("Failed to read just targets")?;

    debug!("Listing {} targets", actions.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&actions)?);
    } else {
        for action in &actions {
            println!("{}", action.label);
        }
    }

    Ok(())
}
