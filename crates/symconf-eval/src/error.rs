//! Error types for expression evaluation.

use std::fmt;
use symconf_types::{ErrorCode, ExprErrors};

/// Evaluation error: anything that stops an expression producing a value.
#[derive(Debug, Clone)]
pub enum EvalError {
    /// The expression did not lex or parse.
    Syntax(ExprErrors),
    /// A name that is not bound in the environment.
    UndefinedName(String),
    /// Arithmetic applied to a text constant.
    TypeMismatch(String),
    /// `/` with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit range.
    Overflow(String),
    /// A float operation produced NaN or infinity.
    NonFinite(String),
}

impl EvalError {
    /// The diagnostic code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(errors) => errors
                .first()
                .map(|e| e.code)
                .unwrap_or(ErrorCode::UNEXPECTED_TOKEN),
            Self::UndefinedName(_) => ErrorCode::UNDEFINED_NAME,
            Self::TypeMismatch(_) => ErrorCode::TYPE_MISMATCH,
            Self::DivisionByZero => ErrorCode::DIVISION_BY_ZERO,
            Self::Overflow(_) | Self::NonFinite(_) => ErrorCode::OVERFLOW,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(errors) => {
                match errors.first() {
                    Some(first) => write!(f, "syntax error: {}", first.message)?,
                    None => write!(f, "syntax error")?,
                }
                if errors.total_errors > 1 {
                    write!(f, " (and {} more)", errors.total_errors - 1)?;
                }
                Ok(())
            }
            Self::UndefinedName(name) => write!(f, "undefined name: {name}"),
            Self::TypeMismatch(msg) => write!(f, "type mismatch: {msg}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::Overflow(msg) => write!(f, "integer overflow: {msg}"),
            Self::NonFinite(msg) => write!(f, "non-finite result: {msg}"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
