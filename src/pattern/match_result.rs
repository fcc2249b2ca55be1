// Fri Oct 16 2026 - Alex

use std::ops::Range;

/// Half-open byte range of a candidate symbol within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchSpan {
    start: usize,
    end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "inverted match span {}..{}", start, end);
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The candidate bytes this span covers in `line`.
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.as_range()]
    }
}

impl From<regex::bytes::Match<'_>> for MatchSpan {
    fn from(m: regex::bytes::Match<'_>) -> Self {
        Self::new(m.start(), m.end())
    }
}
