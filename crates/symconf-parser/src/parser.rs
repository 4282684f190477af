//! Core parser infrastructure: token cursor, error reporting, helpers.

use symconf_lexer::token::{Token, TokenKind};
use symconf_types::ast::Expr;
use symconf_types::{ErrorCode, ExprError, ExprErrors, Span};

/// The expression parser.
///
/// Consumes a token stream produced by the lexer and builds an [`Expr`].
/// Parsing stops at the first error; the caller receives every lexer
/// diagnostic plus that one parser diagnostic.
pub struct Parser {
    /// The token stream.
    tokens: Vec<Token>,
    /// Current index into `tokens`.
    pos: usize,
    /// Collected errors.
    errors: ExprErrors,
    /// Current nesting depth (parentheses and unary operators).
    pub(crate) depth: u32,
}

/// Result of parsing. `expr` is `None` whenever `errors` is non-empty.
pub struct ParseResult {
    pub expr: Option<Expr>,
    pub errors: ExprErrors,
}

impl Parser {
    /// Create a new parser from a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: ExprErrors::empty(),
            depth: 0,
        }
    }

    // ── Token Cursor ──────────────────────────────────────────────────────────

    /// Returns the current token without advancing.
    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).or_else(|| self.tokens.last())
    }

    /// Returns the kind of the current token.
    pub(crate) fn peek_kind(&self) -> &TokenKind {
        self.peek().map(|t| &t.kind).unwrap_or(&TokenKind::Eof)
    }

    /// Advance the cursor by one and return the consumed token's span.
    pub(crate) fn advance(&mut self) -> Span {
        let span = self.current_span();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        span
    }

    /// Returns the previously consumed token's span.
    pub(crate) fn previous_span(&self) -> Span {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span)
            .unwrap_or(Span::point(1))
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        self.peek().map(|t| t.span).unwrap_or(Span::point(1))
    }

    /// Returns `true` if the current token is `Eof`.
    pub(crate) fn at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind exactly.
    pub(crate) fn check_exact(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// If the current token matches, advance and return `true`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check_exact(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ── Error Reporting ───────────────────────────────────────────────────────

    /// Report an error at the current token position.
    pub(crate) fn error_at_current(&mut self, code: ErrorCode, message: impl Into<String>) {
        let span = self.current_span();
        self.error_at(code, message, span);
    }

    /// Report an error at a specific span.
    pub(crate) fn error_at(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.errors.push_error(ExprError::new(code, message, span));
    }

    /// Report a prepared error (e.g. one carrying a suggestion).
    pub(crate) fn report(&mut self, error: ExprError) {
        self.errors.push_error(error);
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Parse the whole token stream as a single expression.
    pub fn parse(mut self) -> ParseResult {
        if self.at_end() {
            self.error_at_current(ErrorCode::EMPTY_EXPRESSION, "empty expression");
            return ParseResult {
                expr: None,
                errors: self.errors,
            };
        }

        let expr = self.parse_expression();
        if expr.is_some() && !self.at_end() {
            let message = match self.peek_kind() {
                TokenKind::RParen => "unmatched ')'".to_string(),
                other => format!("unexpected '{other}' after expression"),
            };
            self.error_at_current(ErrorCode::UNEXPECTED_TOKEN, message);
        }

        ParseResult {
            expr: if self.errors.has_errors() { None } else { expr },
            errors: self.errors,
        }
    }
}
