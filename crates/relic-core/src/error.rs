//! Error types for traversal and scanning

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while walking and scanning a tree
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root is missing or is not a directory
    #[error("scan root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Directory traversal failed
    #[error("traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A qualifying file could not be opened or read
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A qualifying file is not valid UTF-8
    #[error("{} is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },
}
