//! Scan operations: per-file matching and whole-tree runs

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use super::report::{FileMatches, ScanSummary};
use super::walker::Scanner;
use crate::error::ScanError;

impl Scanner {
    /// Scan a single file and collect its matching lines.
    ///
    /// # Errors
    /// Returns [`ScanError::Read`] if the file cannot be opened or read,
    /// [`ScanError::Decode`] if its contents are not valid UTF-8.
    pub fn scan_file(&self, path: &Path) -> Result<FileMatches, ScanError> {
        let content = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::InvalidData {
                ScanError::Decode {
                    path: path.to_path_buf(),
                }
            } else {
                ScanError::Read {
                    path: path.to_path_buf(),
                    source: err,
                }
            }
        })?;

        let lines = self.detector.matching_lines(&content);
        debug!(path = %path.display(), matches = lines.len(), "scanned file");

        Ok(FileMatches {
            path: path.to_path_buf(),
            lines,
        })
    }

    /// Scan the whole tree, invoking `on_offender` for each file with at
    /// least one match, in traversal order.
    ///
    /// The first traversal or read error aborts the run; no file is skipped
    /// silently.
    ///
    /// # Errors
    /// Returns [`ScanError::NotADirectory`] if the root is missing or not a
    /// directory, and propagates the first traversal or file-read error.
    pub fn scan_with(
        &self,
        mut on_offender: impl FnMut(&FileMatches),
    ) -> Result<ScanSummary, ScanError> {
        if !self.root().is_dir() {
            return Err(ScanError::NotADirectory(self.root().to_path_buf()));
        }

        let mut summary = ScanSummary::default();

        for entry in self.files() {
            let path = entry?;
            let matches = self.scan_file(&path)?;
            summary.files_scanned += 1;
            if !matches.is_clean() {
                on_offender(&matches);
                summary.offenders.push(matches);
            }
        }

        debug!(
            files = summary.files_scanned,
            offenders = summary.offenders.len(),
            "scan complete"
        );
        Ok(summary)
    }

    /// Scan the whole tree and return the summary.
    ///
    /// # Errors
    /// Same as [`Scanner::scan_with`].
    pub fn scan(&self) -> Result<ScanSummary, ScanError> {
        self.scan_with(|_| {})
    }
}
