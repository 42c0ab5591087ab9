pub mod fixed;
pub mod http;
pub mod types;

use crate::approval::types::{ApprovalEnvelope, ApprovalVerdict};
use crate::error::Result;
use async_trait::async_trait;

pub use fixed::FixedVerdict;
pub use http::HttpApproval;

/// Something that can answer a permission envelope.
/// The real one talks HTTP; tests plug in fixed answers.
#[async_trait]
pub trait ApprovalHandler {
    async fn request_approval(&self, envelope: &ApprovalEnvelope) -> Result<ApprovalVerdict>;
}
