//! Audit logging of executed requests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::outcome::Outcome;
use crate::request::Request;

/// An audit log entry.
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Operation that was run.
    pub op: String,
    /// Whether the operation failed.
    pub failed: bool,
    /// Failure kind (if failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Failure reason (if failed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Summary of the input.
    pub summary: String,
}

impl AuditEntry {
    /// Create a new audit entry from a request and its outcome.
    pub fn new(request: &Request, outcome: &Outcome) -> Self {
        let (kind, reason) = match outcome.failure_info() {
            Some(info) => (Some(info.kind.clone()), Some(info.reason.clone())),
            None => (None, None),
        };

        Self {
            timestamp: Utc::now(),
            op: request.op.name().to_string(),
            failed: outcome.is_failure(),
            kind,
            reason,
            summary: truncate_string(&request.op.summary(), 200),
        }
    }
}

fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

/// Audit logger for writing entries to a file.
pub struct AuditLogger {
    file: File,
}

impl AuditLogger {
    /// Open or create an audit log file.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Write an audit entry to the log.
    pub fn log(&mut self, entry: &AuditEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.file, "{}", json)?;
        self.file.flush()
    }

    /// Log the outcome of a request.
    pub fn log_outcome(&mut self, request: &Request, outcome: &Outcome) -> std::io::Result<()> {
        let entry = AuditEntry::new(request, outcome);
        self.log(&entry)
    }
}
