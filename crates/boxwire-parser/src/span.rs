//! Byte ranges into the diagram source.

use std::{fmt, ops::Range};

/// A half-open byte range `start..end` into the diagram text.
///
/// Spans let diagnostics point at the exact cell that broke a rule, even
/// though the parser itself works in `(row, col)` coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span covering `range`.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create an empty span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::new(offset..offset)
    }

    /// Get the start offset of the span.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
