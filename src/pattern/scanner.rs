// Fri Oct 16 2026 - Alex

use super::error::PatternError;
use super::match_result::MatchSpan;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// The regex pattern to recognize a decorated symbol. Only a guess: it accepts
/// plenty of strings the undecorator will reject.
pub const DECORATED_SYMBOL_PATTERN: &str = r"\?[a-zA-Z0-9_@?$]+";

static DECORATED_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(DECORATED_SYMBOL_PATTERN).expect("built-in symbol pattern is valid"));

/// Finds candidate symbols in a line.
///
/// Lines are scanned as raw bytes, so text in a non-UTF-8 code page is
/// matched around rather than rejected.
#[derive(Debug, Clone)]
pub struct SymbolScanner {
    pattern: Regex,
}

impl SymbolScanner {
    pub fn new() -> Self {
        Self {
            pattern: DECORATED_SYMBOL.clone(),
        }
    }

    /// Uses `pattern` instead of the built-in heuristic. Patterns that can
    /// match the empty string are rejected since they would yield empty spans.
    pub fn with_pattern(pattern: &str) -> Result<Self, PatternError> {
        let pattern = Regex::new(pattern)?;
        if pattern.is_match(b"") {
            return Err(PatternError::MatchesEmpty(pattern.as_str().to_string()));
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Lazily yields candidate spans left to right.
    ///
    /// Spans never overlap, and each covers the longest run of symbol
    /// characters starting at its sigil. The iterator is single-pass; scan
    /// again to start over.
    pub fn scan<'r, 'h>(&'r self, line: &'h [u8]) -> Matches<'r, 'h> {
        Matches {
            inner: self.pattern.find_iter(line),
        }
    }
}

impl Default for SymbolScanner {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Matches<'r, 'h> {
    inner: regex::bytes::Matches<'r, 'h>,
}

impl Iterator for Matches<'_, '_> {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        self.inner.find(|m| !m.is_empty()).map(MatchSpan::from)
    }
}
