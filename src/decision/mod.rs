pub mod types;

pub use types::*;

use crate::approval::types::ApprovalVerdict;
use crate::audit::AuditLog;
use crate::error::{BridgeError, Result};

/// Exit code for a rendered decision, allow and deny alike.
pub const EXIT_DECIDED: i32 = 0;

/// Map the service's verdict onto the hook decision.
pub fn translate(verdict: &ApprovalVerdict, audit: &AuditLog) -> Decision {
    if verdict.is_approved() {
        audit.record("Permission ALLOWED");
        Decision::Allow
    } else {
        audit.record("Permission DENIED");
        Decision::Deny {
            message: verdict.message().to_string(),
            interrupt: false,
        }
    }
}

/// Serialize the decision as the single stdout document.
pub fn render(decision: &Decision) -> Result<String> {
    serde_json::to_string(&HookOutput::new(decision.clone())).map_err(|e| {
        BridgeError::UnexpectedFailure(format!("failed to serialize decision: {}", e))
    })
}
