//! Token types for the expression lexer.
//!
//! Defines [`TokenKind`] covering every lexeme an expression body may
//! contain and [`Token`], which pairs a kind with a source [`Span`].

use symconf_types::Span;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Source location.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind an expression body can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ── Literals ──────────────────────────────────────────────

    /// Integer literal: `42`
    IntLit(i128),
    /// Float literal: `1.2`, `.5`, `2e3`
    FloatLit(f64),

    // ── Identifiers ──────────────────────────────────────────

    /// Constant name: `DEFAULT_PORT`
    Identifier(String),

    // ── Operators ────────────────────────────────────────────

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // ── Punctuation ──────────────────────────────────────────

    /// `(`
    LParen,
    /// `)`
    RParen,

    // ── Special ──────────────────────────────────────────────

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for `+ - * /`.
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLit(n) => write!(f, "{n}"),
            TokenKind::FloatLit(n) => write!(f, "{}", symconf_types::format_float(*n)),
            TokenKind::Identifier(name) => write!(f, "{name}"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Eof => write!(f, "end of expression"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_construction() {
        let t = Token::new(TokenKind::Plus, Span::new(3, 3));
        assert_eq!(t.kind, TokenKind::Plus);
        assert_eq!(t.span.start, 3);
    }

    #[test]
    fn test_is_operator() {
        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::Slash.is_operator());
        assert!(!TokenKind::LParen.is_operator());
        assert!(!TokenKind::Identifier("A".into()).is_operator());
    }

    #[test]
    fn test_display_literals() {
        assert_eq!(TokenKind::IntLit(42).to_string(), "42");
        assert_eq!(TokenKind::FloatLit(1.2).to_string(), "1.2");
        assert_eq!(TokenKind::FloatLit(2.0).to_string(), "2.0");
        assert_eq!(TokenKind::Identifier("BASE".into()).to_string(), "BASE");
    }

    #[test]
    fn test_display_special() {
        assert_eq!(TokenKind::Eof.to_string(), "end of expression");
        assert_eq!(TokenKind::RParen.to_string(), ")");
    }
}
