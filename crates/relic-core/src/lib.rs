//! relic-core: detection engine for the relic CI gate
//!
//! Walks a directory tree, tests each qualifying source file's lines against
//! a heuristic pattern for commented-out code, and reports offenders. The
//! pattern is deliberately naive (see [`detector`]); the library's contract
//! is faithful reproduction of that heuristic, not syntactic accuracy.

pub mod config;
pub mod detector;
pub mod error;
pub mod scanner;

pub use config::ScanConfig;
pub use detector::Detector;
pub use error::ScanError;
pub use scanner::{FileMatches, ScanSummary, Scanner};
