//! File walker: streams qualifying files under the scan root

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::detector::Detector;
use crate::error::ScanError;

/// Scanner for a single directory tree
#[derive(Debug)]
pub struct Scanner {
    pub(crate) config: ScanConfig,
    pub(crate) detector: Detector,
}

impl Scanner {
    /// Create a scanner for the given configuration
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            detector: Detector::new(),
        }
    }

    /// Stream the files that qualify for scanning.
    ///
    /// Files whose names carry no recognized suffix are never opened.
    /// Traversal errors surface as `Err` items; sibling order is not
    /// significant.
    pub fn files(&self) -> impl Iterator<Item = Result<PathBuf, ScanError>> + '_ {
        WalkDir::new(&self.config.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let path = entry.into_path();
                    self.config.matches_suffix(&path).then_some(Ok(path))
                }
                Ok(_) => None,
                Err(err) => Some(Err(ScanError::Walk(err))),
            })
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.config.root
    }
}
