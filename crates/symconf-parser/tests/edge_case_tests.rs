//! Parser edge cases: malformed expressions, nesting limits, and the
//! interaction between lexer and parser diagnostics.

use symconf_parser::{parse_source, MAX_DEPTH};
use symconf_types::{ErrorCode, SourceText, Span};

fn codes(text: &str) -> Vec<ErrorCode> {
    parse_source(&SourceText::new(text))
        .errors
        .errors
        .iter()
        .map(|e| e.code)
        .collect()
}

fn fails(text: &str) -> bool {
    let result = parse_source(&SourceText::new(text));
    result.expr.is_none() && result.errors.has_errors()
}

#[test]
fn test_empty_expression() {
    assert_eq!(codes(""), vec![ErrorCode::EMPTY_EXPRESSION]);
    assert_eq!(codes("   "), vec![ErrorCode::EMPTY_EXPRESSION]);
}

#[test]
fn test_dangling_operator() {
    assert_eq!(codes("A +"), vec![ErrorCode::UNEXPECTED_TOKEN]);
    assert_eq!(codes("* 2"), vec![ErrorCode::UNEXPECTED_TOKEN]);
    assert_eq!(codes("2 ** 3"), vec![ErrorCode::UNEXPECTED_TOKEN]);
}

#[test]
fn test_unclosed_paren_points_at_open() {
    let result = parse_source(&SourceText::new("  (A + 1"));
    let err = result.errors.first().unwrap();
    assert_eq!(err.code, ErrorCode::UNCLOSED_PAREN);
    assert_eq!(err.span, Span::point(3));
    assert_eq!(err.suggestion.as_deref(), Some("add a closing ')'"));
}

#[test]
fn test_unmatched_close_paren() {
    let result = parse_source(&SourceText::new("A + 1)"));
    let err = result.errors.first().unwrap();
    assert_eq!(err.code, ErrorCode::UNEXPECTED_TOKEN);
    assert_eq!(err.message, "unmatched ')'");
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(fails("A B"));
    assert!(fails("1 2"));
    assert!(fails("2x"));
}

#[test]
fn test_empty_parens_rejected() {
    assert_eq!(codes("()"), vec![ErrorCode::UNEXPECTED_TOKEN]);
}

#[test]
fn test_lexer_errors_come_first() {
    assert_eq!(
        codes("A % B +"),
        vec![ErrorCode::UNEXPECTED_CHARACTER, ErrorCode::UNEXPECTED_TOKEN]
    );
}

#[test]
fn test_lexer_error_alone_still_fails() {
    // `A $ B` lexes to `A B` which is also a parse error; `A$` lexes to `A`.
    assert!(fails("A$"));
    assert_eq!(codes("A$"), vec![ErrorCode::UNEXPECTED_CHARACTER]);
}

#[test]
fn test_nesting_at_limit_is_accepted() {
    let depth = (MAX_DEPTH - 1) as usize;
    let text = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(!fails(&text));
}

#[test]
fn test_nesting_past_limit_is_rejected() {
    let depth = MAX_DEPTH as usize + 10;
    let text = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(codes(&text).contains(&ErrorCode::NESTING_TOO_DEEP));

    let text = format!("{}1", "-".repeat(depth));
    assert!(codes(&text).contains(&ErrorCode::NESTING_TOO_DEEP));
}

#[test]
fn test_long_operator_chain_within_limit() {
    let text = format!("{}1", "1 + ".repeat(200));
    assert!(!fails(&text));
    let text = format!("{}2", "2 * ".repeat(200));
    assert!(!fails(&text));
}

#[test]
fn test_long_operator_chain_is_rejected() {
    let text = format!("{}1", "1 + ".repeat(20_000));
    assert_eq!(codes(&text), vec![ErrorCode::NESTING_TOO_DEEP]);

    let text = format!("{}A", "A / ".repeat(20_000));
    assert_eq!(codes(&text), vec![ErrorCode::NESTING_TOO_DEEP]);
}
