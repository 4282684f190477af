//! Shared types for symconf.
//!
//! This crate defines the numeric and scalar values bound to constants,
//! the expression AST, source spans, and the diagnostics produced while
//! lexing and parsing `^[...]` expression bodies.

mod error;
mod number;
mod span;
pub mod ast;

pub use error::{ErrorCategory, ErrorCode, ExprError, ExprErrors, MAX_ERRORS};
pub use number::{format_float, Number, Scalar};
pub use span::{SourceText, Span};
