//! Error taxonomy for the hook pipeline.
//!
//! Every failure the bridge can hit falls into one of four kinds. All of them
//! end the run with exit code 2; none is ever turned into an allow or a deny.

use thiserror::Error;

/// Exit code for any run that could not render a decision.
pub const EXIT_FAILURE: i32 = 2;

/// A failure somewhere between reading stdin and rendering the decision.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// stdin was empty, not JSON, or not shaped like a hook request.
    #[error("Invalid JSON input: {0}")]
    MalformedInput(String),

    /// The approval service answered with a non-2xx status.
    #[error("Approval service rejected the request: {status} {reason}")]
    RemoteRejected { status: u16, reason: String },

    /// The service could not be reached, the connection broke, or the call timed out.
    #[error("Could not reach approval service: {0}")]
    TransportFailure(String),

    /// Anything else (bad configuration, an unreadable response body, ...).
    #[error("Unexpected error: {0}")]
    UnexpectedFailure(String),
}

impl BridgeError {
    /// Category label written into the audit log next to the detail.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::MalformedInput(_) => "MalformedInput",
            BridgeError::RemoteRejected { .. } => "RemoteRejected",
            BridgeError::TransportFailure(_) => "TransportFailure",
            BridgeError::UnexpectedFailure(_) => "UnexpectedFailure",
        }
    }

    /// Exit status the hook binary reports for this failure.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

/// Flatten an error and its `source()` chain into one line.
///
/// reqwest's top-level messages ("error sending request for url ...") hide the
/// actual cause, which only shows up further down the chain.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !line.contains(&cause_text) {
            line.push_str(": ");
            line.push_str(&cause_text);
        }
        source = cause.source();
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = BridgeError::RemoteRejected {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Approval service rejected the request: 503 Service Unavailable"
        );
        assert_eq!(err.kind(), "RemoteRejected");
    }

    #[test]
    fn test_every_kind_exits_with_two() {
        let errors = [
            BridgeError::MalformedInput("x".into()),
            BridgeError::RemoteRejected {
                status: 500,
                reason: "Internal Server Error".into(),
            },
            BridgeError::TransportFailure("x".into()),
            BridgeError::UnexpectedFailure("x".into()),
        ];
        for err in &errors {
            assert_eq!(err.exit_code(), 2, "{} should exit 2", err.kind());
        }
    }

    #[test]
    fn test_error_chain_walks_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let wrapped = anyhow::Error::new(io).context("error sending request");
        let line = error_chain(&*wrapped);
        assert_eq!(line, "error sending request: connection refused");
    }
}
