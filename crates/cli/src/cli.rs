use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use multijust_core::CacheTargets;
use std::path::PathBuf;

use crate::commands::{cache_command, list_command, pick_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "multijust")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory to look for the project and justfile in (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Cache policy: auto (follow modification time), true (always cached), false (never)
    #[arg(long, global = true, value_name = "POLICY")]
    pub cache_targets: Option<CacheTargets>,

    /// Justfile basename to look for; repeat to try several in order
    #[arg(long = "justfile-candidate", global = true, value_name = "NAME")]
    pub justfile_candidates: Vec<String>,

    /// Directory where cached target lists are kept
    #[arg(long, global = true, env = "MULTIJUST_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Keep the cache in memory only for this invocation
    #[arg(long, global = true)]
    pub no_persist: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the targets of the current project's justfile
    #[command(visible_alias = "ls")]
    List {
        /// Read this justfile instead of searching for one
        #[arg(short, long)]
        justfile: Option<PathBuf>,

        /// Prefix used in labels
        #[arg(short, long)]
        project_type: Option<String>,

        /// Print the actions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a target
    #[command(visible_alias = "r")]
    Run {
        /// Name of the target to run
        target: String,

        /// Read this justfile instead of searching for one
        #[arg(short, long)]
        justfile: Option<PathBuf>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Choose a target interactively and run it
    #[command(visible_alias = "p")]
    Pick {
        /// Read this justfile instead of searching for one
        #[arg(short, long)]
        justfile: Option<PathBuf>,

        /// Print the chosen command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Inspect or clear cached target lists
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CacheAction {
    /// Show every cached entry
    List,
    /// Remove all cached entries
    Clear,
}

impl Commands {
    /// Execute the command
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::List {
                justfile,
                project_type,
                json,
            } => list_command(global, justfile.as_deref(), project_type.as_deref(), json),
            Commands::Run {
                target,
                justfile,
                dry_run,
            } => run_command(global, &target, justfile.as_deref(), dry_run),
            Commands::Pick { justfile, dry_run } => {
                pick_command(global, justfile.as_deref(), dry_run)
            }
            Commands::Cache { action } => cache_command(global, action),
        }
    }
}
