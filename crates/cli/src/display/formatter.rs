use multijust_core::{CacheEntry, LabeledAction, ProjectId, provider::TARGETS_CACHE_VARIABLE};
use std::time::SystemTime;

/// Numbered menu of actions, one per line
pub fn format_menu(actions: &[LabeledAction]) -> String {
    let width = actions.len().to_string().len();
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| format!("{:>width$}) {}\n", i + 1, action.label))
        .collect()
}

/// One line of the cache inventory
pub fn format_cache_entry(scope: &ProjectId, key: &str, entry: &CacheEntry) -> String {
    let title = if key == TARGETS_CACHE_VARIABLE.key {
        TARGETS_CACHE_VARIABLE.title
    } else {
        key
    };
    let size = match &entry.value {
        serde_json::Value::Array(items) => format!("{} items", items.len()),
        _ => "1 value".to_string(),
    };
    let age = SystemTime::now()
        .duration_since(entry.recorded_at)
        .map(|age| format!("{}s ago", age.as_secs()))
        .unwrap_or_else(|_| "in the future".to_string());

    format!("{scope}\t{title}\t{size}\t{age}")
}
