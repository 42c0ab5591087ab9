//! Wire types exchanged with the approval service.

use crate::request::ResolvedRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Event name carried by every outbound envelope.
pub const PERMISSION_REQUEST_EVENT: &str = "permission_request";

pub const NO_MESSAGE: &str = "No message";
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Everything the service gets to know about the pending tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalContext {
    pub tool_name: String,
    pub tool_input: Map<String, Value>,
    pub session_id: String,
    pub cwd: String,
    /// UTC, second precision, e.g. `2026-10-18T07:30:00Z`.
    pub timestamp: String,
}

impl ApprovalContext {
    pub fn new(request: &ResolvedRequest, sent_at: DateTime<Utc>) -> Self {
        Self {
            tool_name: request.tool_name.clone(),
            tool_input: request.tool_input.clone(),
            session_id: request.session_id.clone(),
            cwd: request.cwd.clone(),
            timestamp: sent_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }
}

/// The request body POSTed to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalEnvelope {
    pub event: String,
    pub question: String,
    pub context: ApprovalContext,
}

impl ApprovalEnvelope {
    pub fn new(question: String, context: ApprovalContext) -> Self {
        Self {
            event: PERMISSION_REQUEST_EVENT.to_string(),
            question,
            context,
        }
    }
}

/// The service's answer. Missing fields are allowed and resolved by the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalVerdict {
    #[serde(default)]
    pub approved: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "requestId")]
    pub request_id: Option<String>,
}

impl ApprovalVerdict {
    pub fn allow() -> Self {
        Self {
            approved: Some(true),
            ..Default::default()
        }
    }

    pub fn deny(message: impl Into<String>) -> Self {
        Self {
            approved: Some(false),
            message: Some(message.into()),
            request_id: None,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approved.unwrap_or(false)
    }

    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(NO_MESSAGE)
    }

    pub fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or(UNKNOWN_REQUEST_ID)
    }
}

/// One entry from the service's pending-request listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PendingRequest {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body of the service's health route.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}
