//! Identifier validation for constant names and object keys.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{TranslateError, TranslateResult};

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid")
});

pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Fails with [`TranslateError::Validation`] unless `name` is an identifier.
pub fn validate_identifier(name: &str) -> TranslateResult<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(TranslateError::Validation {
            name: name.to_string(),
        })
    }
}
