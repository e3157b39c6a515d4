//! Scan configuration

use std::path::{Path, PathBuf};

/// Directory scanned when none is given
pub const DEFAULT_ROOT: &str = "src";

/// File name suffixes scanned by default
pub const DEFAULT_SUFFIXES: &[&str] = &[".py", ".js", ".ts"];

/// Configuration for a scan: where traversal starts and which files qualify
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub suffixes: Vec<String>,
}

impl ScanConfig {
    /// Create a configuration for the given root with the default suffix set
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Replace the suffix set
    #[must_use]
    pub fn with_suffixes(mut self, suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a file qualifies for scanning.
    ///
    /// Tested against the file name, not the full path, so a suffix like
    /// `".py"` cannot match a directory component.
    #[must_use]
    pub fn matches_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.suffixes.iter().any(|suffix| name.ends_with(suffix)))
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}
