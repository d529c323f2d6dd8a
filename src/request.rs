//! Request parsing for the command-line front end.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One request read from stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Project directory used to find `.ktools.toml` (optional).
    #[serde(default)]
    pub cwd: Option<String>,

    /// The operation and its arguments.
    #[serde(flatten)]
    pub op: Operation,
}

/// Operations the front end can run.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Split a command line into arguments.
    Tokenize { input: String },
    /// Translate a glob into a delimited regex.
    Glob {
        pattern: String,
        #[serde(default)]
        delimiter: Option<String>,
        #[serde(default)]
        anchor: Option<bool>,
    },
    /// Return the candidates a glob matches.
    Match {
        pattern: String,
        candidates: Vec<String>,
    },
    /// Escape backreferences in a replacement template.
    EscapeReplace { input: String },
    /// Check for an all-digit string.
    IsDigit { input: String },
    /// Hex dump of the UTF-8 bytes of `input`.
    Hexdump {
        input: String,
        #[serde(default)]
        reverse: bool,
    },
    /// Big-endian integer value of the UTF-8 bytes of `input`.
    ToInt {
        input: String,
        #[serde(default)]
        reverse: bool,
    },
    /// Human-readable byte size.
    FormatSize { bytes: f64 },
    /// Align the columns of a table.
    Pad { rows: Vec<Vec<String>> },
    /// Case-insensitive lookup of `key` among `keys`.
    FindKey { key: String, keys: Vec<String> },
    /// List files below a directory.
    Tree {
        dir: String,
        #[serde(default)]
        extension: Option<String>,
    },
}

impl Request {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Operation {
    /// Name used on the wire and in audit entries.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Tokenize { .. } => "tokenize",
            Operation::Glob { .. } => "glob",
            Operation::Match { .. } => "match",
            Operation::EscapeReplace { .. } => "escape_replace",
            Operation::IsDigit { .. } => "is_digit",
            Operation::Hexdump { .. } => "hexdump",
            Operation::ToInt { .. } => "to_int",
            Operation::FormatSize { .. } => "format_size",
            Operation::Pad { .. } => "pad",
            Operation::FindKey { .. } => "find_key",
            Operation::Tree { .. } => "tree",
        }
    }

    /// Short description of the main input, for audit entries.
    pub fn summary(&self) -> String {
        match self {
            Operation::Tokenize { input }
            | Operation::EscapeReplace { input }
            | Operation::IsDigit { input }
            | Operation::Hexdump { input, .. }
            | Operation::ToInt { input, .. } => input.clone(),
            Operation::Glob { pattern, .. } | Operation::Match { pattern, .. } => pattern.clone(),
            Operation::FormatSize { bytes } => bytes.to_string(),
            Operation::Pad { rows } => format!("{} rows", rows.len()),
            Operation::FindKey { key, .. } => key.clone(),
            Operation::Tree { dir, .. } => dir.clone(),
        }
    }
}
