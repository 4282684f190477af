//! Expression lexer: converts the body of a `^[...]` string to tokens.
//!
//! Features:
//! - Integer (`42`) and float (`1.2`, `.5`, `1.`, `2e3`, `1.5e-2`) literals
//! - ASCII identifiers (`[A-Za-z_][A-Za-z0-9_]*`)
//! - The four arithmetic operators and parentheses
//! - Error recovery: collects up to 20 errors instead of stopping at the first

use symconf_types::{ErrorCode, ExprError, ExprErrors, SourceText, Span};

use crate::token::{Token, TokenKind};

/// The expression lexer.
///
/// Works on `char`s rather than bytes so that reported columns match
/// what the user sees even when the expression contains non-ASCII text.
pub struct Lexer {
    /// The expression text as characters.
    chars: Vec<char>,
    /// Current index into `chars`.
    pos: usize,
    /// Collected errors.
    errors: ExprErrors,
}

/// Result of lexing: tokens + any errors collected.
pub struct LexResult {
    /// The token stream (always ends with [`TokenKind::Eof`]).
    pub tokens: Vec<Token>,
    /// Errors encountered during lexing.
    pub errors: ExprErrors,
}

impl Lexer {
    /// Create a new lexer for the given expression text.
    pub fn new(source: &SourceText) -> Self {
        Self {
            chars: source.text.chars().collect(),
            pos: 0,
            errors: ExprErrors::empty(),
        }
    }

    /// Lex the entire expression into a token stream.
    pub fn lex(mut self) -> LexResult {
        let mut tokens = Vec::new();

        loop {
            if self.errors.is_full() {
                break;
            }
            let token = self.scan_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        // Ensure token stream always ends with Eof
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            tokens.push(Token::new(TokenKind::Eof, self.current_span()));
        }

        LexResult {
            tokens,
            errors: self.errors,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    /// 1-based column of the next unread character.
    fn col(&self) -> u32 {
        self.pos as u32 + 1
    }

    fn current_span(&self) -> Span {
        Span::point(self.col())
    }

    /// Span from `start` (0-based index) to the last consumed character.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32 + 1, (self.pos as u32).max(start as u32 + 1))
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn emit_error(&mut self, code: ErrorCode, message: impl Into<String>, span: Span) {
        self.errors.push_error(ExprError::new(code, message, span));
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        // If we've hit the error cap, stop immediately
        if self.errors.is_full() {
            return Token::new(TokenKind::Eof, self.current_span());
        }

        let start = self.pos;
        let Some(ch) = self.advance() else {
            return Token::new(TokenKind::Eof, self.current_span());
        };

        let kind = match ch {
            '0'..='9' => return self.scan_number(start),
            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                return self.scan_number(start)
            }
            'a'..='z' | 'A'..='Z' | '_' => return self.scan_identifier(start),

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,

            _ => {
                let span = self.span_from(start);
                let error = ExprError::new(
                    ErrorCode::UNEXPECTED_CHARACTER,
                    format!("unexpected character '{ch}'"),
                    span,
                );
                let error = match ch {
                    '%' | '^' | '&' | '|' | '<' | '>' | '=' | '!' => error
                        .with_suggestion("only '+', '-', '*' and '/' are available in expressions"),
                    '"' | '\'' => error.with_suggestion("string literals are not allowed in expressions"),
                    _ => error,
                };
                self.errors.push_error(error);
                // Error recovery: skip the character and try again
                return self.scan_token();
            }
        };

        Token::new(kind, self.span_from(start))
    }

    // ─────────────────────────────────────────────────────────────
    // Number literals
    // ─────────────────────────────────────────────────────────────

    fn scan_number(&mut self, start: usize) -> Token {
        // The first digit (or leading '.') was already consumed
        let mut is_float = self.chars[start] == '.';
        self.consume_digits();

        if !is_float && self.peek() == Some('.') {
            self.advance();
            self.consume_digits();
            is_float = true;
        }

        // Exponent only when digits actually follow: `2e3`, `1.5e-2`
        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                for _ in 0..digits_at {
                    self.advance();
                }
                self.consume_digits();
                is_float = true;
            }
        }

        let span = self.span_from(start);
        let text = self.text_from(start);

        if is_float {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Token::new(TokenKind::FloatLit(value), span),
                _ => {
                    self.emit_error(
                        ErrorCode::NUMBER_OUT_OF_RANGE,
                        format!("number '{text}' is out of range"),
                        span,
                    );
                    Token::new(TokenKind::FloatLit(0.0), span)
                }
            }
        } else {
            match text.parse::<i128>() {
                Ok(value) => Token::new(TokenKind::IntLit(value), span),
                Err(_) => {
                    self.emit_error(
                        ErrorCode::NUMBER_OUT_OF_RANGE,
                        format!("integer '{text}' does not fit in 128 bits"),
                        span,
                    );
                    Token::new(TokenKind::IntLit(0), span)
                }
            }
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Identifiers
    // ─────────────────────────────────────────────────────────────

    fn scan_identifier(&mut self, start: usize) -> Token {
        // First character was already consumed (letter or `_`)
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        let span = self.span_from(start);
        Token::new(TokenKind::Identifier(self.text_from(start)), span)
    }
}
