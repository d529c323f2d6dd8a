//! Outcome of running a request.

use serde::Serialize;
use serde_json::Value;

/// The result of running one operation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The operation produced a value.
    Success(Value),
    /// The operation failed on its input.
    Failure(FailureInfo),
}

/// Information about why an operation failed.
#[derive(Debug, Clone, Serialize)]
pub struct FailureInfo {
    /// Human-readable reason.
    pub reason: String,
    /// Machine-readable failure kind, e.g. `tokenize.malformed_quote`.
    pub kind: String,
    /// Error offset into the input, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl FailureInfo {
    pub fn new(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            reason: reason.into(),
            position: None,
        }
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl Outcome {
    /// Create a success outcome from anything serializable.
    pub fn success(value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Outcome::Success(v),
            Err(e) => Outcome::failure("output.serialize", e.to_string()),
        }
    }

    /// Create a failure outcome.
    pub fn failure(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Outcome::Failure(FailureInfo::new(kind, reason))
    }

    /// Check if this is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Get the failure info if failed.
    pub fn failure_info(&self) -> Option<&FailureInfo> {
        match self {
            Outcome::Failure(info) => Some(info),
            Outcome::Success(_) => None,
        }
    }
}
