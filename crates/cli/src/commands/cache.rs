use anyhow::{Context, Result};
use multijust_core::CacheStore;

use crate::{
    cli::{CacheAction, GlobalArgs},
    display::format_cache_entry,
    session::{load_config, open_cache, working_dir},
};

pub fn cache_command(global: &GlobalArgs, action: CacheAction) -> Result<()> {
    let working_dir = working_dir(global)?;
    let config = load_config(global, &working_dir)?;
    let mut cache = open_cache(global, &config)?;

    match action {
        CacheAction::List => {
            let entries = cache.entries();
            if entries.is_empty() {
                eprintln!("ℹ️  Cache is empty");
            }
            for (scope, key, entry) in entries {
                println!("{}", format_cache_entry(scope, key, entry));
            }
        }
        CacheAction::Clear => {
            cache.clear().context("Failed to clear cache")?;
            match cache.cache_dir() {
                Some(dir) => println!("🧹 Cleared cache at {}", dir.display()),
                None => println!("🧹 Nothing persisted to clear"),
            }
        }
    }

    Ok(())
}
