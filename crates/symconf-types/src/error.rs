use crate::{SourceText, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of diagnostics collected for one expression.
pub const MAX_ERRORS: usize = 20;

/// Error category, determined by error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Syntax,
    Name,
    Arithmetic,
}

/// Numeric error code (E100–E399).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    // ── Syntax errors (E100–E199) ──
    pub const UNEXPECTED_CHARACTER: Self = Self(100);
    pub const UNEXPECTED_TOKEN: Self = Self(101);
    pub const UNCLOSED_PAREN: Self = Self(102);
    pub const NUMBER_OUT_OF_RANGE: Self = Self(103);
    pub const NESTING_TOO_DEEP: Self = Self(104);
    pub const EMPTY_EXPRESSION: Self = Self(105);

    // ── Name errors (E200–E299) ──
    pub const UNDEFINED_NAME: Self = Self(200);

    // ── Arithmetic errors (E300–E399) ──
    pub const TYPE_MISMATCH: Self = Self(300);
    pub const DIVISION_BY_ZERO: Self = Self(301);
    pub const OVERFLOW: Self = Self(302);

    /// Get the category for this error code.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Name,
            300..=399 => ErrorCategory::Arithmetic,
            _ => ErrorCategory::Syntax, // fallback
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Name => write!(f, "name"),
            Self::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

/// A structured diagnostic for an expression body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExprError {
    /// Error code (e.g., E101).
    pub code: ErrorCode,
    /// Error category (derived from code).
    pub category: ErrorCategory,
    /// Human-readable error message.
    pub message: String,
    /// Location inside the expression text.
    #[serde(flatten)]
    pub span: Span,
    /// Optional fix suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ExprError {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            category: code.category(),
            message: message.into(),
            span,
            suggestion: None,
        }
    }

    /// Attach a fix suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for ExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.span, self.code, self.category, self.message
        )
    }
}

impl std::error::Error for ExprError {}

/// Diagnostics collected while lexing and parsing one expression.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExprErrors {
    pub errors: Vec<ExprError>,
    pub total_errors: usize,
}

impl ExprErrors {
    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    /// Returns `true` once [`MAX_ERRORS`] have been reported.
    pub fn is_full(&self) -> bool {
        self.total_errors >= MAX_ERRORS
    }

    /// Add an error, respecting the MAX_ERRORS limit.
    pub fn push_error(&mut self, error: ExprError) {
        if self.errors.len() < MAX_ERRORS {
            self.errors.push(error);
        }
        self.total_errors += 1;
    }

    /// Append every error from `other`.
    pub fn extend(&mut self, other: ExprErrors) {
        let dropped = other.total_errors.saturating_sub(other.errors.len());
        for error in other.errors {
            self.push_error(error);
        }
        // Errors past the cap in `other` still count.
        self.total_errors += dropped;
    }

    /// The first reported error, if any.
    pub fn first(&self) -> Option<&ExprError> {
        self.errors.first()
    }

    /// Render every error with a caret line under the offending columns.
    pub fn report(&self, source: &SourceText) -> String {
        let mut out = String::new();
        for error in &self.errors {
            out.push_str(&format!("{error}\n  {}\n  {}\n", source.text, source.underline(error.span)));
            if let Some(suggestion) = &error.suggestion {
                out.push_str(&format!("  help: {suggestion}\n"));
            }
        }
        out
    }
}
