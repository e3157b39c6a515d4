//! Commented-out code detection
//!
//! A single-pattern heuristic, not a parser: a line "looks like code" when a
//! `#` comment contains an identifier run, optional whitespace, and a closed
//! parenthesized argument list later on the same line. The pattern both
//! under- and over-matches (it knows nothing about `//` or block comments,
//! and prose such as `# see formula: total(a,b) explained` is flagged).
//! That imprecision is part of the tool's contract and must not be "fixed".

use std::sync::LazyLock;

use regex::Regex;

/// Optional leading whitespace, a `#`, anything, then an identifier run,
/// optional whitespace, `(`, anything, `)`. Anchored at line start only;
/// the closing parenthesis may sit anywhere before end of line.
const COMMENTED_CODE_PATTERN: &str = r"^\s*#.*[a-zA-Z0-9_]+\s*\(.*\)";

#[allow(clippy::expect_used)]
static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMMENTED_CODE_PATTERN).expect("pattern is a valid regex"));

/// Line-level detector for commented-out code
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector;

impl Detector {
    /// Create a detector
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Test a single line against the pattern
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        PATTERN.is_match(line)
    }

    /// Collect every matching line of `content`, trimmed of surrounding
    /// whitespace, in order of appearance
    #[must_use]
    pub fn matching_lines(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| self.is_match(line))
            .map(|line| line.trim().to_string())
            .collect()
    }
}
