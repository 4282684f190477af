//! symconf parser: converts a token stream into an expression AST.

mod parse_expr;
mod parser;

pub use parse_expr::MAX_DEPTH;
pub use parser::{ParseResult, Parser};

use symconf_lexer::Lexer;
use symconf_types::SourceText;

/// Lex and parse an expression body in one step.
///
/// Lexer diagnostics come first in the returned errors, followed by any
/// parser diagnostic. `expr` is `None` if either stage reported an error.
pub fn parse_source(source: &SourceText) -> ParseResult {
    let lexed = Lexer::new(source).lex();
    let parsed = Parser::new(lexed.tokens).parse();

    if !lexed.errors.has_errors() {
        return parsed;
    }
    let mut errors = lexed.errors;
    errors.extend(parsed.errors);
    ParseResult { expr: None, errors }
}
