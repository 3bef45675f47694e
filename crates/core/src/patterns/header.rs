//! Header-line target scanning
//!
//! A target header is a line that starts in the first column with a token
//! free of whitespace and colons, immediately followed by a colon which is
//! itself followed by a space or the end of the line:
//!
//! ```text
//! build: deps      -> "build"
//! test:            -> "test"
//! path:sub more    -> (no match)
//!     echo hi      -> (no match)
//! ```
//!
//! Names starting with `.` are private and are dropped entirely.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::{error::Result, patterns::TargetPattern};

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^([^\s:]+):(?: |\r?$)").expect("header pattern is a valid regex")
});

const PRIVATE_PREFIX: char = '.';

/// Scan `source` for target header lines.
///
/// Order is top to bottom and duplicates are kept as encountered.
pub fn scan_header_targets(source: &str) -> Vec<String> {
    HEADER_PATTERN
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .filter(|name| !name.starts_with(PRIVATE_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Read `file_path` and return the targets it declares.
///
/// Fails with [`crate::Error::IoError`] when the file cannot be read; an
/// empty file is simply an empty list.
pub fn extract_targets(file_path: &Path) -> Result<Vec<String>> {
    extract_targets_with(&JustfilePattern, file_path)
}

/// Read `file_path` and scan it with `pattern`
pub fn extract_targets_with(
    pattern: &dyn TargetPattern,
    file_path: &Path,
) -> Result<Vec<String>> {
    let source = std::fs::read_to_string(file_path)?;
    let targets = pattern.scan(&source);
    debug!(
        "Extracted {} {} targets from {}",
        targets.len(),
        pattern.name(),
        file_path.display()
    );
    Ok(targets)
}

/// Header scanning for justfiles
#[derive(Debug, Default, Clone, Copy)]
pub struct JustfilePattern;

impl TargetPattern for JustfilePattern {
    fn name(&self) -> &str {
        "just"
    }

    fn scan(&self, source: &str) -> Vec<String> {
        scan_header_targets(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reference_justfile() {
        let source = "build: deps\n    echo hi\n.hidden: ; echo secret\ntest:\n";
        assert_eq!(scan_header_targets(source), vec!["build", "test"]);
    }

    #[test]
    fn test_header_without_trailing_newline() {
        assert_eq!(scan_header_targets("only:"), vec!["only"]);
    }

    #[test]
    fn test_colon_followed_by_text_is_not_a_header() {
        assert!(scan_header_targets("path:subpath more\n").is_empty());
        assert!(scan_header_targets("url:https://example.com\n").is_empty());
    }

    #[test]
    fn test_indented_lines_are_ignored() {
        let source = "  indented: x\n\tagain:\nreal: x\n";
        assert_eq!(scan_header_targets(source), vec!["real"]);
    }

    #[test]
    fn test_private_targets_are_excluded() {
        let source = ".private:\n.also-private: dep\npublic:\n";
        assert_eq!(scan_header_targets(source), vec!["public"]);
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let source = "a:\nb:\na: b\n";
        assert_eq!(scan_header_targets(source), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_assignments_do_not_match() {
        let source = "version := \"1.0\"\nexport FOO := \"bar\"\nrelease: build\n";
        assert_eq!(scan_header_targets(source), vec!["release"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "build:\r\nlint: fmt\r\n";
        assert_eq!(scan_header_targets(source), vec!["build", "lint"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(scan_header_targets("").is_empty());
    }

    #[test]
    fn test_extract_targets_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default: build").unwrap();
        writeln!(file, "build:").unwrap();
        writeln!(file, "    cargo build").unwrap();

        let targets = extract_targets(file.path()).unwrap();
        assert_eq!(targets, vec!["default", "build"]);
    }

    #[test]
    fn test_extract_targets_from_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(extract_targets(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_extract_targets_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract_targets(&dir.path().join("justfile"));
        assert!(matches!(result, Err(crate::Error::IoError(_))));
    }

    #[test]
    fn test_justfile_pattern_delegates_to_scanner() {
        let pattern = JustfilePattern;
        assert_eq!(pattern.name(), "just");
        assert_eq!(pattern.scan("fmt:\n.x:\n"), vec!["fmt"]);
    }
}
