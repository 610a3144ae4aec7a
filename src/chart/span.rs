use std::fmt;

/// A half-open interval `[start, end)` over token positions.
///
/// A span is never empty.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Position of the first token.
    pub start: usize,
    /// Position one past the last token.
    pub end: usize,
}

impl Span {
    /// Creates a span.
    ///
    /// # Panics
    ///
    /// Panics if `start >= end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "empty span {}..{}", start, end);
        Span { start, end }
    }

    /// The span of the single token at `position`.
    #[inline]
    pub fn token(position: usize) -> Self {
        Span::new(position, position + 1)
    }

    /// Returns the number of tokens covered.
    #[inline]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Whether this span covers exactly one token.
    #[inline]
    pub fn is_token(self) -> bool {
        self.len() == 1
    }

    /// Splits the span at a position strictly inside it.
    #[inline]
    pub fn split_at(self, split: usize) -> (Span, Span) {
        debug_assert!(self.start < split && split < self.end);
        (Span::new(self.start, split), Span::new(split, self.end))
    }

    /// Iterates over all positions at which this span can be split.
    #[inline]
    pub fn split_points(self) -> std::ops::Range<usize> {
        self.start + 1..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
