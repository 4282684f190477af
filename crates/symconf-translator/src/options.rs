//! Translation options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How entry lines inside `$[ ... ]` blocks are indented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Entries of a block at depth `d` get `d + 1` spaces, its `]` gets `d`.
    #[default]
    Nested,
    /// Every entry gets one space and every `]` none, at any depth.
    Flat,
}

impl IndentStyle {
    /// Leading whitespace for the entries of a block at `depth`.
    pub fn entry(self, depth: usize) -> String {
        match self {
            IndentStyle::Nested => " ".repeat(depth + 1),
            IndentStyle::Flat => " ".to_string(),
        }
    }

    /// Leading whitespace for the closing `]` of a block at `depth`.
    pub fn close(self, depth: usize) -> String {
        match self {
            IndentStyle::Nested => " ".repeat(depth),
            IndentStyle::Flat => String::new(),
        }
    }
}

impl fmt::Display for IndentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentStyle::Nested => write!(f, "nested"),
            IndentStyle::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for IndentStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nested" => Ok(IndentStyle::Nested),
            "flat" => Ok(IndentStyle::Flat),
            other => Err(format!(
                "unknown indent style '{other}' (expected 'nested' or 'flat')"
            )),
        }
    }
}

/// Options controlling the rendered text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateOptions {
    pub indent: IndentStyle,
}

impl TranslateOptions {
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }
}
