//! HTTP approval handler: one POST to the approval service, then wait.
//!
//! The service holds the request open until a human answers, so the client
//! timeout is long (10 minutes by default). Nothing is retried. Every failure
//! is written to the audit log with its category before it is returned.

use crate::approval::types::{ApprovalEnvelope, ApprovalVerdict};
use crate::approval::ApprovalHandler;
use crate::audit::AuditLog;
use crate::config::BridgeConfig;
use crate::error::{error_chain, BridgeError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

pub struct HttpApproval {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    audit: AuditLog,
}

impl HttpApproval {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, audit: AuditLog) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                BridgeError::UnexpectedFailure(format!(
                    "failed to build HTTP client: {}",
                    error_chain(&e)
                ))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
            audit,
        })
    }

    pub fn from_config(config: &BridgeConfig, audit: AuditLog) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout, audit)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, envelope: &ApprovalEnvelope) -> Result<ApprovalVerdict> {
        let body = serde_json::to_vec(envelope).map_err(|e| {
            BridgeError::UnexpectedFailure(format!("failed to serialize request: {}", e))
        })?;

        tracing::debug!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::RemoteRejected {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;
        self.audit.record(format!("API response: {}", text));

        parse_verdict(&text)
    }

    /// Sort a reqwest failure into transport vs. everything else.
    fn classify(&self, err: reqwest::Error) -> BridgeError {
        let detail = error_chain(&err);
        if err.is_timeout() {
            BridgeError::TransportFailure(format!(
                "timed out after {}s: {}",
                self.timeout.as_secs(),
                detail
            ))
        } else if err.is_connect() || err.is_request() || err.is_body() {
            BridgeError::TransportFailure(detail)
        } else {
            BridgeError::UnexpectedFailure(detail)
        }
    }
}

#[async_trait]
impl ApprovalHandler for HttpApproval {
    async fn request_approval(&self, envelope: &ApprovalEnvelope) -> Result<ApprovalVerdict> {
        self.post(envelope).await.map_err(|e| self.audit.failed(e))
    }
}

/// Parse a 2xx response body. It must be a JSON object; missing fields are fine.
pub fn parse_verdict(body: &str) -> Result<ApprovalVerdict> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        BridgeError::UnexpectedFailure(format!("approval service returned invalid JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(BridgeError::UnexpectedFailure(
            "approval service response is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        BridgeError::UnexpectedFailure(format!("malformed approval verdict: {}", e))
    })
}
