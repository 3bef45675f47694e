use anyhow::{Context, Result};
use multijust_core::LabeledAction;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::{
    cli::GlobalArgs, commands::run::execute_action, display::format_menu,
    session::build_provider,
};

/// Outcome of reading the user's answer to the menu
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    Chosen(&'a LabeledAction),
    Cancelled,
    Invalid(String),
}

/// Interpret `input` as a 1-based menu index, a target name or a label
pub fn choose<'a>(actions: &'a [LabeledAction], input: &str) -> Selection<'a> {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return Selection::Cancelled;
    }

    if let Ok(index) = input.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| actions.get(i)) {
            Some(action) => Selection::Chosen(action),
            None => Selection::Invalid(format!("no entry numbered {index}")),
        };
    }

    actions
        .iter()
        .find(|action| action.target == input || action.label == input)
        .map(Selection::Chosen)
        .unwrap_or_else(|| Selection::Invalid(format!("no target named '{input}'")))
}

pub fn pick_command(global: &GlobalArgs, justfile: Option<&Path>, dry_run: bool) -> Result<()> {
    let mut provider = build_provider(global)?;
    let actions = provider
        .get_targets(None, justfile)
        .context("Failed to read just targets")?;

    if actions.is_empty() {
        eprintln!("ℹ️  No just targets found for this project");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stderr = io::stderr();

    loop {
        write!(stderr, "{}", format_menu(&actions))?;
        write!(stderr, "Select a target (number or name, empty to cancel): ")?;
        stderr.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match choose(&actions, &line) {
            Selection::Chosen(action) => return execute_action(action, dry_run),
            Selection::Cancelled => return Ok(()),
            Selection::Invalid(reason) => writeln!(stderr, "⚠️  {reason}")?,
        }
    }
}
