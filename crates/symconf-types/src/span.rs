use serde::{Deserialize, Serialize};
use std::fmt;

/// Column span inside a single-line expression.
///
/// Columns are 1-based and count characters, so they line up with what
/// a user sees when the expression text is printed in an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "column")]
    pub start: u32,
    #[serde(rename = "end_column")]
    pub end: u32,
}

impl Span {
    /// Create a new span.
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a zero-width span at a single column.
    pub fn point(col: u32) -> Self {
        Self::new(col, col)
    }

    /// Merge two spans into one that covers both.
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Number of columns covered (at least 1).
    pub fn width(self) -> u32 {
        self.end.saturating_sub(self.start) + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col {}", self.start)
    }
}

/// Holds an expression's source text for error reporting.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub text: String,
}

impl SourceText {
    /// Create a new source text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render a caret line underneath `span`, e.g. `"    ^^^"`.
    pub fn underline(&self, span: Span) -> String {
        let pad = span.start.saturating_sub(1) as usize;
        format!("{}{}", " ".repeat(pad), "^".repeat(span.width() as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_point() {
        let s = Span::point(5);
        assert_eq!(s.start, 5);
        assert_eq!(s.end, 5);
        assert_eq!(s.width(), 1);
    }

    #[test]
    fn test_span_merge_is_order_independent() {
        let a = Span::new(3, 5);
        let b = Span::new(9, 12);
        assert_eq!(a.merge(b), Span::new(3, 12));
        assert_eq!(b.merge(a), Span::new(3, 12));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(7, 9).to_string(), "col 7");
    }

    #[test]
    fn test_underline() {
        let src = SourceText::new("BASE + $");
        assert_eq!(src.underline(Span::point(8)), "       ^");
        assert_eq!(src.underline(Span::new(1, 4)), "^^^^");
    }
}
