//! Source byte spans.
//!
//! Compact 8-byte half-open ranges into the source text. Every token stores
//! two spans: one for its leading trivia and one for its own text.

use std::fmt;

/// Half-open byte range `[start, end)` into the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a new span.
    ///
    /// # Panics
    /// Debug-asserts `start <= end`.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} past end {end}");
        Span { start, end }
    }

    /// Zero-width span at `pos`. Used for the EOF token's text.
    #[inline]
    pub fn empty_at(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length in bytes.
    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Slice the covered text out of `source`.
    ///
    /// # Panics
    /// Panics if the span is out of bounds for `source` or splits a UTF-8
    /// character. Spans produced by the lexer are always valid for the text
    /// they were lexed from.
    #[inline]
    pub fn text(self, source: &str) -> &str {
        &source[self.start as usize..self.end as usize]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
