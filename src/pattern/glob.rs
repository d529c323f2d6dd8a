//! Glob to regular expression translation.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Errors that can occur when compiling a glob.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid glob '{glob}': {source}")]
    Regex {
        glob: String,
        #[source]
        source: regex::Error,
    },
}

/// How a glob is rendered as a delimited regex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobOptions {
    /// Character wrapping the pattern on both ends.
    pub delimiter: char,
    /// Add `^` and `$` around the body.
    pub anchor: bool,
    /// Append the `i` flag (and match case-insensitively when compiled).
    pub case_insensitive: bool,
}

impl Default for GlobOptions {
    fn default() -> Self {
        Self {
            delimiter: '/',
            anchor: true,
            case_insensitive: false,
        }
    }
}

/// Translate a glob with the default options: `/` delimiter, anchored.
pub fn glob_to_regex(glob: &str) -> String {
    glob_to_regex_with(glob, &GlobOptions::default())
}

/// Translate a glob into a delimited regex such as `/^ar.*st$/`.
///
/// Literal runs are escaped, including the delimiter itself, so the
/// result is always a single delimited pattern. `?` becomes `.` and `*`
/// becomes `.*`.
pub fn glob_to_regex_with(glob: &str, options: &GlobOptions) -> String {
    let body = translate(glob, Some(options.delimiter));
    let d = options.delimiter;
    let mut out = if options.anchor {
        format!("{d}^{body}${d}")
    } else {
        format!("{d}{body}{d}")
    };
    if options.case_insensitive {
        out.push('i');
    }
    out
}

/// Compile a glob into a [`Regex`] that matches the same strings.
///
/// The delimiter is irrelevant here and is not escaped.
pub fn compile_glob(glob: &str, options: &GlobOptions) -> Result<Regex, PatternError> {
    let body = translate(glob, None);
    let pattern = if options.anchor {
        format!("^{body}$")
    } else {
        body
    };
    RegexBuilder::new(&pattern)
        .case_insensitive(options.case_insensitive)
        .build()
        .map_err(|e| PatternError::Regex {
            glob: glob.to_string(),
            source: e,
        })
}

fn translate(glob: &str, delimiter: Option<char>) -> String {
    let mut out = String::new();
    let mut rest = glob;

    loop {
        let Some(idx) = rest.find(['*', '?']) else {
            quote_literal(rest, delimiter, &mut out);
            break;
        };
        quote_literal(&rest[..idx], delimiter, &mut out);
        match rest.as_bytes()[idx] {
            b'?' => out.push('.'),
            _ => out.push_str(".*"),
        }
        rest = &rest[idx + 1..];
    }

    out
}

fn quote_literal(run: &str, delimiter: Option<char>, out: &mut String) {
    let mut buf = [0u8; 4];
    for c in run.chars() {
        let escaped = regex::escape(c.encode_utf8(&mut buf));
        // Delimiters that are already regex metacharacters got escaped above
        if delimiter == Some(c) && escaped.len() == c.len_utf8() {
            out.push('\\');
        }
        out.push_str(&escaped);
    }
}
