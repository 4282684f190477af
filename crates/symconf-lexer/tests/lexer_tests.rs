//! Lexer tests for expression bodies.
//!
//! Covers: integer and float literals, identifiers, operators, whitespace
//! handling, out-of-range numbers, error recovery, and determinism.

use symconf_lexer::{Lexer, TokenKind};
use symconf_types::{ErrorCode, SourceText};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex text and return just the token kinds (excluding final Eof).
fn kinds(text: &str) -> Vec<TokenKind> {
    let src = SourceText::new(text);
    Lexer::new(&src)
        .lex()
        .tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| t.kind)
        .collect()
}

/// Lex and return the error count.
fn error_count(text: &str) -> usize {
    let src = SourceText::new(text);
    Lexer::new(&src).lex().errors.total_errors
}

/// Lex and return the first error code.
fn first_error_code(text: &str) -> Option<ErrorCode> {
    let src = SourceText::new(text);
    Lexer::new(&src).lex().errors.first().map(|e| e.code)
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Identifier(name.to_string())
}

// ─────────────────────────────────────────────────────────────────────
// Numbers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_integer_literals() {
    assert_eq!(kinds("0"), vec![TokenKind::IntLit(0)]);
    assert_eq!(kinds("8080"), vec![TokenKind::IntLit(8080)]);
    assert_eq!(
        kinds("18446744073709551616"),
        vec![TokenKind::IntLit(1 << 64)]
    );
}

#[test]
fn test_float_literals() {
    assert_eq!(kinds("1.2"), vec![TokenKind::FloatLit(1.2)]);
    assert_eq!(kinds(".5"), vec![TokenKind::FloatLit(0.5)]);
    assert_eq!(kinds("3."), vec![TokenKind::FloatLit(3.0)]);
    assert_eq!(kinds("2e3"), vec![TokenKind::FloatLit(2000.0)]);
    assert_eq!(kinds("1.5e-2"), vec![TokenKind::FloatLit(0.015)]);
    assert_eq!(kinds("4E+1"), vec![TokenKind::FloatLit(40.0)]);
}

#[test]
fn test_exponent_without_digits_is_identifier() {
    // `2e` is the integer 2 followed by the name `e`
    assert_eq!(kinds("2e"), vec![TokenKind::IntLit(2), ident("e")]);
    assert_eq!(
        kinds("2e+"),
        vec![TokenKind::IntLit(2), ident("e"), TokenKind::Plus]
    );
}

#[test]
fn test_integer_overflow_is_reported() {
    assert_eq!(
        first_error_code("999999999999999999999999999999999999999999"),
        Some(ErrorCode::NUMBER_OUT_OF_RANGE)
    );
}

#[test]
fn test_float_overflow_is_reported() {
    assert_eq!(
        first_error_code("1e999"),
        Some(ErrorCode::NUMBER_OUT_OF_RANGE)
    );
}

// ─────────────────────────────────────────────────────────────────────
// Identifiers & operators
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_identifiers() {
    assert_eq!(kinds("BASE_SPEED"), vec![ident("BASE_SPEED")]);
    assert_eq!(kinds("_x1"), vec![ident("_x1")]);
    assert_eq!(kinds("a b"), vec![ident("a"), ident("b")]);
}

#[test]
fn test_operators_and_parens() {
    assert_eq!(
        kinds("( + - * / )"),
        vec![
            TokenKind::LParen,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_full_expression_without_spaces() {
    assert_eq!(
        kinds("DEFAULT_PORT+2"),
        vec![ident("DEFAULT_PORT"), TokenKind::Plus, TokenKind::IntLit(2)]
    );
    assert_eq!(
        kinds("(A-1)*.5"),
        vec![
            TokenKind::LParen,
            ident("A"),
            TokenKind::Minus,
            TokenKind::IntLit(1),
            TokenKind::RParen,
            TokenKind::Star,
            TokenKind::FloatLit(0.5),
        ]
    );
}

#[test]
fn test_tabs_and_newlines_are_whitespace() {
    assert_eq!(
        kinds("\tA\n*\r\n2 "),
        vec![ident("A"), TokenKind::Star, TokenKind::IntLit(2)]
    );
}

// ─────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_attribute_access_is_rejected() {
    // `.` not followed by a digit is not part of any token
    assert_eq!(error_count("A.b"), 1);
    assert_eq!(
        first_error_code("A.b"),
        Some(ErrorCode::UNEXPECTED_CHARACTER)
    );
}

#[test]
fn test_string_quotes_are_rejected() {
    assert_eq!(error_count("'abc'"), 2);
}

#[test]
fn test_power_and_modulo_are_rejected() {
    assert_eq!(error_count("2 ** 3"), 0); // lexes; the parser rejects `* *`
    assert_eq!(error_count("7 % 2"), 1);
    assert_eq!(error_count("A[0]"), 2);
}

#[test]
fn test_non_ascii_columns() {
    let src = SourceText::new("π + 1");
    let result = Lexer::new(&src).lex();
    let err = result.errors.first().unwrap();
    assert_eq!(err.span.start, 1);
    assert_eq!(result.tokens[0].span.start, 3);
}

#[test]
fn test_determinism_100_iterations() {
    let first = kinds("(BASE + 2) * 1.5 / .25 - X_1");
    for i in 0..100 {
        assert_eq!(
            kinds("(BASE + 2) * 1.5 / .25 - X_1"),
            first,
            "Determinism failure at iteration {i}"
        );
    }
}
