//! symconf translator: JSON documents to the symbolic config language.
//!
//! ```text
//! JSON → classify keys/values → evaluate ^[...] → render $[ ... ] / list(...) → text
//! ```
//!
//! ```
//! let out = symconf_translator::translate_str(
//!     r#"{"define": {"name": "PORT", "value": 8080},
//!         "server": {"port": "^[PORT + 1]"}}"#,
//! )
//! .unwrap();
//! assert_eq!(out, "(define PORT 8080);\n$[\n server : $[\n  port : 8081,\n ],\n]");
//! ```

pub mod error;
pub mod ident;
pub mod markers;
pub mod options;
pub mod translator;

pub use error::{TranslateError, TranslateResult};
pub use ident::{is_identifier, validate_identifier};
pub use options::{IndentStyle, TranslateOptions};
pub use translator::Translator;

pub use symconf_eval::{evaluate, Environment, EvalError};
pub use symconf_types::{Number, Scalar, SourceText};

use serde_json::Value;

/// Translate a document with a fresh environment and default options.
pub fn translate(document: &Value) -> TranslateResult<String> {
    translate_with(document, &mut Environment::new(), TranslateOptions::default())
}

/// Translate a document against `env`, which receives its declarations.
pub fn translate_with(
    document: &Value,
    env: &mut Environment,
    options: TranslateOptions,
) -> TranslateResult<String> {
    Translator::new(env)
        .with_options(options)
        .translate_document(document)
}

/// Parse JSON text and translate it with default options.
///
/// Object key order from the text is preserved in the output.
pub fn translate_str(json: &str) -> TranslateResult<String> {
    let document: Value = serde_json::from_str(json)?;
    translate(&document)
}
