//! Lexical conventions of the input document.
//!
//! Two markers carry meaning beyond plain JSON:
//! - strings wrapped as `^[ ... ]` are expressions (as values) or bare
//!   constant references (as top-level keys);
//! - top-level keys starting with `define` declare a constant.
//!
//! All marker detection lives here.

use serde_json::{Map, Value};
use symconf_types::Number;

pub const EXPRESSION_OPEN: &str = "^[";
pub const EXPRESSION_CLOSE: char = ']';
pub const DECLARATION_PREFIX: &str = "define";
pub const REFERENCE_SIGIL: char = '^';

/// The trimmed interior of a `^[ ... ]` string, or `None` for any other
/// string.
pub fn expression_body(s: &str) -> Option<&str> {
    s.strip_prefix(EXPRESSION_OPEN)?
        .strip_suffix(EXPRESSION_CLOSE)
        .map(str::trim)
}

pub fn is_declaration_key(key: &str) -> bool {
    key.starts_with(DECLARATION_PREFIX)
}

/// How a top-level document key is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
    /// `define...`: the value declares a constant.
    Declaration,
    /// `^[NAME]`: emits a bare reference to `NAME`.
    Reference(&'a str),
    /// Anything else is a named block.
    Plain,
}

pub fn classify_key(key: &str) -> KeyKind<'_> {
    if is_declaration_key(key) {
        KeyKind::Declaration
    } else if let Some(name) = expression_body(key) {
        KeyKind::Reference(name)
    } else {
        KeyKind::Plain
    }
}

/// A document value, classified for translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueKind<'a> {
    Object(&'a Map<String, Value>),
    List(&'a [Value]),
    Number(Number),
    /// Interior of a `^[ ... ]` string, already trimmed.
    Expression(&'a str),
    Text(&'a str),
    /// Booleans and `null`.
    Unsupported(&'a Value),
}

pub fn classify(value: &Value) -> ValueKind<'_> {
    match value {
        Value::Object(map) => ValueKind::Object(map),
        Value::Array(items) => ValueKind::List(items),
        Value::Number(n) => match number_of(n) {
            Some(n) => ValueKind::Number(n),
            None => ValueKind::Unsupported(value),
        },
        Value::String(s) => match expression_body(s) {
            Some(body) => ValueKind::Expression(body),
            None => ValueKind::Text(s),
        },
        Value::Bool(_) | Value::Null => ValueKind::Unsupported(value),
    }
}

/// JSON integers stay integral and exact; everything else is a float.
pub fn number_of(n: &serde_json::Number) -> Option<Number> {
    n.as_i64()
        .map(Number::from)
        .or_else(|| n.as_u64().map(|u| Number::Int(u.into())))
        .or_else(|| n.as_f64().map(Number::Float))
}
