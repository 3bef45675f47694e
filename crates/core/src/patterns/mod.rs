pub mod header;
pub mod pattern;

pub use header::{JustfilePattern, extract_targets, extract_targets_with, scan_header_targets};
pub use pattern::TargetPattern;
