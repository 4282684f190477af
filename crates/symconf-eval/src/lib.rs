//! symconf evaluator: computes `^[...]` expression bodies.
//!
//! Evaluation is sandboxed: an expression can only combine number
//! literals and the constants bound in an [`Environment`] using
//! `+ - * /`, unary signs and parentheses.

pub mod env;
pub mod error;
pub mod evaluator;

pub use env::Environment;
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;

use symconf_parser::parse_source;
use symconf_types::{Scalar, SourceText};

/// Lex, parse and evaluate an expression body against `env`.
pub fn evaluate(expression: &str, env: &Environment) -> EvalResult<Scalar> {
    let source = SourceText::new(expression);
    let parsed = parse_source(&source);
    let expr = match parsed.expr {
        Some(expr) if !parsed.errors.has_errors() => expr,
        _ => return Err(EvalError::Syntax(parsed.errors)),
    };
    let value = Evaluator::new(env).eval_expr(&expr)?;
    log::debug!("evaluated `{expression}` to {value}");
    Ok(value)
}
