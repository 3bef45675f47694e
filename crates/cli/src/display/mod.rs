pub mod formatter;

pub use formatter::{format_cache_entry, format_menu};
