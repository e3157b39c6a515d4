//! Scan result types

use std::path::PathBuf;

/// Matches found in a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatches {
    pub path: PathBuf,
    /// Matched lines, trimmed, in order of appearance
    pub lines: Vec<String>,
}

impl FileMatches {
    /// True when no line of the file matched
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Aggregate outcome of one scan
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub files_scanned: usize,
    /// Offending files in traversal order
    pub offenders: Vec<FileMatches>,
}

impl ScanSummary {
    /// True when at least one scanned file had at least one match
    #[must_use]
    pub fn has_matches(&self) -> bool {
        !self.offenders.is_empty()
    }
}
