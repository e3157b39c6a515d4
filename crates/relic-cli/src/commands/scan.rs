//! Scan command: walk a tree and report commented-out code

use std::path::Path;

use anyhow::Result;
use relic_core::{ScanConfig, Scanner};
use tracing::debug;

/// Header printed above the matches of one offending file
#[must_use]
pub fn file_header(path: &Path) -> String {
    format!("\n Commented-out code found in: {}", path.display())
}

/// A single matched line as printed under the header
#[must_use]
pub fn match_line(line: &str) -> String {
    format!("  → {line}")
}

/// Run the scan command. Returns true when commented-out code was found.
///
/// Offending files are reported in traversal order as they are scanned; the
/// final banner states the overall verdict. Traversal and read errors abort
/// the run.
///
/// # Errors
/// Returns an error if the root cannot be traversed or a file cannot be read.
pub fn run(root: &Path, suffixes: &[String]) -> Result<bool> {
    println!("🔍 Scanning for commented-out code...");

    let config = ScanConfig::new(root).with_suffixes(suffixes.iter().cloned());
    let scanner = Scanner::new(config);

    let summary = scanner.scan_with(|matches| {
        println!("{}", file_header(&matches.path));
        for line in &matches.lines {
            println!("{}", match_line(line));
        }
    })?;

    debug!(
        files = summary.files_scanned,
        offenders = summary.offenders.len(),
        "scan finished"
    );

    if summary.has_matches() {
        println!("\n Build failed because commented-out code was detected.");
    } else {
        println!(" No commented-out code found!");
    }

    Ok(summary.has_matches())
}

#[cfg(test)]
mod tests;
