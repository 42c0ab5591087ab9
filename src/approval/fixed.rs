//! Approval handler with a canned answer (for testing and dry runs).

use crate::approval::types::{ApprovalEnvelope, ApprovalVerdict};
use crate::approval::ApprovalHandler;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// Returns the same verdict for every envelope and remembers what it was sent.
pub struct FixedVerdict {
    verdict: ApprovalVerdict,
    seen: Mutex<Vec<ApprovalEnvelope>>,
}

impl FixedVerdict {
    pub fn new(verdict: ApprovalVerdict) -> Self {
        Self {
            verdict,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Envelopes received so far, in order.
    pub fn envelopes(&self) -> Vec<ApprovalEnvelope> {
        self.seen
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ApprovalHandler for FixedVerdict {
    async fn request_approval(&self, envelope: &ApprovalEnvelope) -> Result<ApprovalVerdict> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(envelope.clone());
        }
        Ok(self.verdict.clone())
    }
}
