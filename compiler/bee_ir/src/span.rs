//! Byte-offset source spans.

use std::fmt;
use std::ops::Range;

/// A byte offset did not fit in `u32`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("source offset {0} exceeds u32::MAX")]
pub struct SpanError(pub usize);

/// Half-open byte range `start..end` into the source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let start = u32::try_from(range.start).map_err(|_| SpanError(range.start))?;
        let end = u32::try_from(range.end).map_err(|_| SpanError(range.end))?;
        Ok(Span { start, end })
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_covers_both() {
        let merged = Span::new(4, 9).merge(Span::new(1, 6));
        assert_eq!(merged, Span::new(1, 9));
        assert_eq!(merged.len(), 8);
    }

    #[test]
    fn range_round_trip() {
        let span = Span::try_from_range(3..7).unwrap_or_default();
        assert_eq!(span.to_range(), 3..7);
        assert!(!span.is_empty());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_offsets_are_rejected() {
        let big = u32::MAX as usize + 1;
        assert_eq!(Span::try_from_range(0..big), Err(SpanError(big)));
    }
}
