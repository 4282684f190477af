//! Translation error types.

use symconf_eval::EvalError;
use thiserror::Error;

/// Errors that abort a translation run.
///
/// Every variant is fatal: the first one encountered is returned and no
/// partial output is produced.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A constant name or object key does not match the identifier grammar.
    #[error("invalid name: '{name}'")]
    Validation { name: String },

    /// An `^[...]` expression could not be computed.
    #[error("cannot evaluate expression `{expression}`")]
    Evaluation {
        expression: String,
        #[source]
        source: EvalError,
    },

    /// A value that is not an object, array, number or string.
    #[error("unsupported value type: {value}")]
    UnsupportedType { value: String },

    /// A `define...` entry without a usable `name`/`value` pair.
    #[error("malformed declaration '{key}': {reason}")]
    MalformedDeclaration { key: String, reason: String },

    /// The document root is not a JSON object.
    #[error("document must be a JSON object, found {found}")]
    NotAMapping { found: &'static str },

    /// The input text is not valid JSON.
    #[error("invalid JSON input")]
    Json(#[from] serde_json::Error),
}

/// Translation result type alias.
pub type TranslateResult<T> = Result<T, TranslateError>;
