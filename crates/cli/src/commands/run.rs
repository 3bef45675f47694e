use anyhow::{Context, Result};
use multijust_core::LabeledAction;
use std::path::Path;
use tracing::info;

use crate::{cli::GlobalArgs, session::build_provider};

pub fn run_command(
    global: &GlobalArgs,
    target: &str,
    justfile: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let mut provider = build_provider(global)?;
    let action = provider.find_target(target, None, justfile)?;
    execute_action(&action, dry_run)
}

/// Run (or with `dry_run`, print) the command behind `action`
pub fn execute_action(action: &LabeledAction, dry_run: bool) -> Result<()> {
    let command = &action.command;
    let shell_cmd = command.to_shell_command();

    if dry_run {
        println!("{shell_cmd}");
        if let Some(ref dir) = command.working_dir {
            println!("Working directory: {dir}");
        }
        return Ok(());
    }

    info!("Running: {}", shell_cmd);
    if let Some(ref dir) = command.working_dir {
        info!("Working directory: {}", dir);
    }

    let status = command
        .execute()
        .with_context(|| format!("Failed to execute: {shell_cmd}"))?;

    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }

    Ok(())
}
