//! The hook pipeline: stdin document in, decision out.
//!
//! Input Reader -> Question Builder -> Approval Client -> Decision Translator,
//! with an audit line after each stage. Exactly one envelope goes to the
//! handler per call; its error, if any, is returned unchanged. The handler
//! audits its own failures, so only input and rendering errors are recorded here.

use crate::approval::types::{ApprovalContext, ApprovalEnvelope};
use crate::approval::ApprovalHandler;
use crate::audit::AuditLog;
use crate::decision::{self, Decision};
use crate::error::Result;
use crate::request::{question_for, ActionRequest};
use chrono::Utc;
use serde_json::Value;

/// First audit line of every hook invocation.
pub const RUN_MARKER: &str = "=== PermissionRequest hook triggered ===";

/// Run one permission request through the handler and return the decision.
pub async fn run<H>(raw_input: &str, handler: &H, audit: &AuditLog) -> Result<Decision>
where
    H: ApprovalHandler + ?Sized,
{
    let request = ActionRequest::parse(raw_input).map_err(|e| audit.failed(e))?;
    audit.record(format!("Input JSON: {}", raw_input.trim()));

    let request = request.resolve();
    audit.record(format!("Tool: {}", request.tool_name));
    audit.record(format!(
        "Input: {}",
        Value::Object(request.tool_input.clone())
    ));

    let question = question_for(&request.tool_name, &request.tool_input);
    audit.record(format!("Generated question: {}", question));

    let envelope = ApprovalEnvelope::new(question, ApprovalContext::new(&request, Utc::now()));
    audit.record("Sending request to approval service...");

    let verdict = handler.request_approval(&envelope).await?;
    audit.record(format!(
        "Approved: {}, Message: {}, RequestID: {}",
        verdict.is_approved(),
        verdict.message(),
        verdict.request_id()
    ));

    Ok(decision::translate(&verdict, audit))
}

/// Like [`run`], but returns the rendered stdout line.
pub async fn respond<H>(raw_input: &str, handler: &H, audit: &AuditLog) -> Result<String>
where
    H: ApprovalHandler + ?Sized,
{
    let decision = run(raw_input, handler, audit).await?;
    decision::render(&decision).map_err(|e| audit.failed(e))
}
