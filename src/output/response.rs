//! Response formatting for CLI output.

use crate::outcome::{FailureInfo, Outcome};
use serde::Serialize;

/// JSON body for failed operations.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<'a> {
    pub error: &'a FailureInfo,
}

/// Where a formatted response should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Printed on stdout.
    Stdout(String),
    /// Printed on stderr.
    Stderr(String),
}

/// Format an outcome: values as compact JSON on stdout, failures as an
/// `ERROR:` line on stderr.
pub fn format_response(outcome: &Outcome) -> Response {
    match outcome {
        Outcome::Success(value) => Response::Stdout(value.to_string()),
        Outcome::Failure(info) => Response::Stderr(format_error_message(info)),
    }
}

fn format_error_message(info: &FailureInfo) -> String {
    format!("ERROR: {} [{}]", info.reason, info.kind)
}

/// Format a failure as JSON, for callers that parse stderr.
pub fn format_json_error(info: &FailureInfo) -> String {
    serde_json::to_string(&ErrorResponse { error: info }).unwrap_or_else(|_| {
        format!(
            r#"{{"error":{{"kind":"{}","reason":"{}"}}}}"#,
            info.kind, info.reason
        )
    })
}
