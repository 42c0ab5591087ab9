//! Audit log reader for `pingbridge log`.
//!
//! The hook never reads its own log; this is for the human at the terminal.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct AuditReader {
    path: PathBuf,
}

impl AuditReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The last `count` lines of the log, oldest first.
    /// A log that was never written reads as empty.
    pub fn tail(&self, count: usize) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read log file: {}", self.path.display()))?;

        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(count);
        Ok(lines[start..].iter().map(|l| l.to_string()).collect())
    }

    /// Split the lines into runs, one per hook invocation.
    pub fn runs(lines: &[String]) -> Vec<&[String]> {
        let mut runs = Vec::new();
        let mut start = 0;
        for (i, line) in lines.iter().enumerate() {
            if i > start && line.contains(crate::bridge::RUN_MARKER) {
                runs.push(&lines[start..i]);
                start = i;
            }
        }
        if start < lines.len() {
            runs.push(&lines[start..]);
        }
        runs
    }
}
