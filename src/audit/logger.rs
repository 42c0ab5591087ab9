//! Audit trail writer, plain text, one line per event.
//!
//! Writes `[<local timestamp>] <message>` to `~/.pingbridge/pingbridge.log`.
//! The file is opened, appended and closed on every call, so nothing is held
//! open while the hook waits on the approval service.
//!
//! Writing is best-effort: a failed append is reported through `tracing` and
//! otherwise ignored. It never changes the decision or the exit code.

use crate::error::BridgeError;
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only audit log.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    /// Target file. `None` disables the log entirely.
    path: Option<PathBuf>,
}

impl AuditLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Create a log writing to a specific path (for testing).
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// A log that drops every line.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append one line. Failures are swallowed.
    pub fn record(&self, message: impl AsRef<str>) {
        let message = message.as_ref();
        if let Err(e) = self.append(message) {
            tracing::debug!("Audit log write failed ({:?}): {}", self.path, e);
        }
    }

    /// Record a failure with its category and hand it back for `?`.
    ///
    /// Call this where the error is first produced so each failure shows up
    /// in the log exactly once.
    pub fn failed(&self, err: BridgeError) -> BridgeError {
        self.record(format!("Error ({}): {}", err.kind(), err));
        err
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", format_line(Local::now(), message))?;
        file.flush()
    }
}

/// Render one audit line.
pub fn format_line(at: DateTime<Local>, message: &str) -> String {
    format!("[{}] {}", at.format("%Y-%m-%d %H:%M:%S"), message)
}
