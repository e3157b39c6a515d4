//! Scanner module: directory traversal and per-file matching
//!
//! Walks the configured root, opens every file whose name carries a
//! recognized suffix, and collects the lines flagged by the detector.

mod report;
mod run;
mod walker;

pub use report::{FileMatches, ScanSummary};
pub use walker::Scanner;
