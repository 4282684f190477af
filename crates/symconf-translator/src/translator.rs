//! Translator: walks a JSON document and renders symbolic config text.
//!
//! Entry point: [`Translator::translate_document`].
//!
//! Top-level keys are dispatched on their marker (see [`crate::markers`]):
//! declarations bind a constant and emit `(define NAME VALUE);`, references
//! emit `^NAME`, and every other key becomes a single-entry `$[ ... ]` block.
//! Fragments are joined with newlines in document order.

use serde_json::{Map, Value};
use symconf_eval::{evaluate, Environment};
use symconf_types::Scalar;

use crate::error::{TranslateError, TranslateResult};
use crate::ident::validate_identifier;
use crate::markers::{classify, classify_key, KeyKind, ValueKind, REFERENCE_SIGIL};
use crate::options::TranslateOptions;

// ══════════════════════════════════════════════════════════════════════════════
// Translator
// ══════════════════════════════════════════════════════════════════════════════

/// Translates documents against a constant [`Environment`].
///
/// Declarations write into the environment, so constants declared by one
/// document stay visible to later calls on the same environment.
pub struct Translator<'env> {
    env: &'env mut Environment,
    options: TranslateOptions,
}

impl<'env> Translator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Self {
            env,
            options: TranslateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TranslateOptions) -> Self {
        self.options = options;
        self
    }

    // ── Documents ────────────────────────────────────────────────────────────

    /// Translate a whole document. The root must be a JSON object.
    pub fn translate_document(&mut self, document: &Value) -> TranslateResult<String> {
        let Value::Object(entries) = document else {
            return Err(TranslateError::NotAMapping {
                found: json_type_name(document),
            });
        };

        let mut fragments = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let fragment = match classify_key(key) {
                KeyKind::Declaration => self.translate_declaration(key, value)?,
                KeyKind::Reference(name) => self.translate_reference(name)?,
                KeyKind::Plain => self.block(std::iter::once((key, value)), 0)?,
            };
            log::trace!("top-level '{key}' -> {} line(s)", fragment.lines().count());
            fragments.push(fragment);
        }

        log::debug!(
            "translated {} top-level entr{} ({} constant(s) bound)",
            entries.len(),
            if entries.len() == 1 { "y" } else { "ies" },
            self.env.len()
        );
        Ok(fragments.join("\n"))
    }

    /// `define...` entry: `{"name": NAME, "value": VALUE}`.
    fn translate_declaration(&mut self, key: &str, value: &Value) -> TranslateResult<String> {
        let malformed = |reason: String| TranslateError::MalformedDeclaration {
            key: key.to_string(),
            reason,
        };

        let Value::Object(fields) = value else {
            return Err(malformed(format!(
                "expected an object with `name` and `value`, found {}",
                json_type_name(value)
            )));
        };
        let name = match fields.get("name") {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(malformed(format!(
                    "`name` must be a string, found {}",
                    json_type_name(other)
                )))
            }
            None => return Err(malformed("missing `name`".to_string())),
        };
        let raw = fields
            .get("value")
            .ok_or_else(|| malformed("missing `value`".to_string()))?;
        for extra in fields.keys().filter(|k| *k != "name" && *k != "value") {
            log::warn!("declaration '{key}': ignoring unknown field `{extra}`");
        }

        validate_identifier(name)?;

        // Declared values are bound as written; `^[...]` text is not evaluated.
        let scalar = match raw {
            Value::String(text) => Scalar::Text(text.clone()),
            other => match classify(other) {
                ValueKind::Number(n) => Scalar::Number(n),
                _ => {
                    return Err(TranslateError::UnsupportedType {
                        value: other.to_string(),
                    })
                }
            },
        };

        let line = format!("(define {name} {scalar});");
        if let Some(previous) = self.env.define(name.as_str(), scalar) {
            log::debug!("constant '{name}' redefined (was {previous})");
        }
        Ok(line)
    }

    /// `^[NAME]` key: emits `^NAME`.
    fn translate_reference(&mut self, name: &str) -> TranslateResult<String> {
        validate_identifier(name)?;
        if !self.env.contains(name) {
            log::warn!("reference to undeclared constant '{name}'");
        }
        Ok(format!("{REFERENCE_SIGIL}{name}"))
    }

    // ── Values ───────────────────────────────────────────────────────────────

    /// Render a single value as it would appear on the right of `key :`.
    pub fn translate_value(&mut self, value: &Value) -> TranslateResult<String> {
        self.value_at(value, 0)
    }

    /// Render an object as a `$[ ... ]` block at the outermost depth.
    pub fn translate_object(&mut self, object: &Map<String, Value>) -> TranslateResult<String> {
        self.block(object.iter(), 0)
    }

    /// Render an array as `list(...)`.
    pub fn translate_list(&mut self, items: &[Value]) -> TranslateResult<String> {
        self.list_at(items, 0)
    }

    fn value_at(&mut self, value: &Value, depth: usize) -> TranslateResult<String> {
        match classify(value) {
            ValueKind::Object(object) => self.block(object.iter(), depth),
            ValueKind::List(items) => self.list_at(items, depth),
            ValueKind::Number(n) => Ok(n.to_string()),
            ValueKind::Expression(body) => self.expression(body),
            ValueKind::Text(text) => Ok(format!("\"{text}\"")),
            ValueKind::Unsupported(other) => Err(TranslateError::UnsupportedType {
                value: other.to_string(),
            }),
        }
    }

    /// Entries of a block at `depth` are rendered one depth deeper.
    fn block<'v>(
        &mut self,
        entries: impl IntoIterator<Item = (&'v String, &'v Value)>,
        depth: usize,
    ) -> TranslateResult<String> {
        let indent = self.options.indent;
        let mut lines = vec!["$[".to_string()];
        for (key, value) in entries {
            validate_identifier(key)?;
            let rendered = self.value_at(value, depth + 1)?;
            lines.push(format!("{}{key} : {rendered},", indent.entry(depth)));
        }
        lines.push(format!("{}]", indent.close(depth)));
        Ok(lines.join("\n"))
    }

    /// List items sit at the same depth as the list itself.
    fn list_at(&mut self, items: &[Value], depth: usize) -> TranslateResult<String> {
        let rendered = items
            .iter()
            .map(|item| self.value_at(item, depth))
            .collect::<TranslateResult<Vec<_>>>()?;
        Ok(format!("list({})", rendered.join(", ")))
    }

    fn expression(&self, body: &str) -> TranslateResult<String> {
        evaluate(body, &*self.env)
            .map(|value| value.to_string())
            .map_err(|source| TranslateError::Evaluation {
                expression: body.to_string(),
                source,
            })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Tests
// ══════════════════════════════════════════════════════════════════════════════
