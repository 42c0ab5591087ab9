//! The hook's stdin document.
//!
//! Stdin format (from the agent's hook system):
//! {
//!   "session_id": "...",
//!   "cwd": "/project/path",
//!   "hook_event_name": "PermissionRequest",
//!   "tool_name": "Bash",
//!   "tool_input": { "command": "rm -rf /tmp/x", "description": "cleanup" }
//! }
//!
//! Every field may be missing, and a field holding the wrong JSON type is
//! treated the same as a missing one. Absence is kept as `None` on the wire
//! type and only turned into the sentinel strings by [`ActionRequest::resolve`].

use crate::error::{BridgeError, Result};
use serde_json::{Map, Value};

pub const UNKNOWN_TOOL: &str = "Unknown";
pub const UNKNOWN_SESSION: &str = "unknown";
pub const UNKNOWN_CWD: &str = "unknown";

/// The parsed stdin document, before defaults are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionRequest {
    pub tool_name: Option<String>,
    pub tool_input: Option<Map<String, Value>>,
    pub session_id: Option<String>,
    pub cwd: Option<String>,
}

/// An [`ActionRequest`] with every default filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub tool_name: String,
    pub tool_input: Map<String, Value>,
    pub session_id: String,
    pub cwd: String,
}

impl ActionRequest {
    /// Parse the full stdin text.
    ///
    /// Only empty input, invalid JSON, or a document that is not an object
    /// are `MalformedInput`. Anything inside the object is taken if it has
    /// the expected type and ignored otherwise.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Err(BridgeError::MalformedInput("stdin was empty".to_string()));
        }

        let value: Value = serde_json::from_str(raw)
            .map_err(|e| BridgeError::MalformedInput(e.to_string()))?;

        let document = match value {
            Value::Object(document) => document,
            other => {
                return Err(BridgeError::MalformedInput(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let text = |key: &str| document.get(key).and_then(Value::as_str).map(str::to_string);
        Ok(Self {
            tool_name: text("tool_name"),
            tool_input: document.get("tool_input").and_then(Value::as_object).cloned(),
            session_id: text("session_id"),
            cwd: text("cwd"),
        })
    }

    /// Apply the documented defaults in one step.
    pub fn resolve(self) -> ResolvedRequest {
        ResolvedRequest {
            tool_name: self.tool_name.unwrap_or_else(|| UNKNOWN_TOOL.to_string()),
            tool_input: self.tool_input.unwrap_or_default(),
            session_id: self.session_id.unwrap_or_else(|| UNKNOWN_SESSION.to_string()),
            cwd: self.cwd.unwrap_or_else(|| UNKNOWN_CWD.to_string()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() {
        let raw = r#"{
            "session_id": "abc-123",
            "cwd": "/work/project",
            "hook_event_name": "PermissionRequest",
            "tool_name": "Bash",
            "tool_input": {"command": "ls", "description": "list"}
        }"#;
        let request = ActionRequest::parse(raw).unwrap().resolve();
        assert_eq!(request.tool_name, "Bash");
        assert_eq!(request.session_id, "abc-123");
        assert_eq!(request.cwd, "/work/project");
        assert_eq!(request.tool_input["command"], "ls");
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let request = ActionRequest::parse("{}").unwrap();
        assert_eq!(request, ActionRequest::default());

        let resolved = request.resolve();
        assert_eq!(resolved.tool_name, "Unknown");
        assert!(resolved.tool_input.is_empty());
        assert_eq!(resolved.session_id, "unknown");
        assert_eq!(resolved.cwd, "unknown");
    }

    #[test]
    fn test_absent_and_literal_unknown_stay_distinct() {
        let literal = ActionRequest::parse(r#"{"session_id": "unknown"}"#).unwrap();
        let absent = ActionRequest::parse("{}").unwrap();
        assert_eq!(literal.session_id.as_deref(), Some("unknown"));
        assert_eq!(absent.session_id, None);
        assert_eq!(literal.resolve().session_id, absent.resolve().session_id);
    }

    #[test]
    fn test_null_fields_count_as_absent() {
        let request = ActionRequest::parse(r#"{"tool_name": null, "tool_input": null}"#)
            .unwrap()
            .resolve();
        assert_eq!(request.tool_name, "Unknown");
        assert!(request.tool_input.is_empty());
    }

    #[test]
    fn test_wrong_typed_fields_count_as_absent() {
        let request = ActionRequest::parse(
            r#"{"tool_name": 7, "tool_input": "rm -rf /", "session_id": 12, "cwd": ["/w"]}"#,
        )
        .unwrap();
        assert_eq!(request, ActionRequest::default());

        let resolved = request.resolve();
        assert_eq!(resolved.tool_name, "Unknown");
        assert!(resolved.tool_input.is_empty());
        assert_eq!(resolved.session_id, "unknown");
        assert_eq!(resolved.cwd, "unknown");
    }

    #[test]
    fn test_one_bad_field_keeps_the_rest() {
        let request = ActionRequest::parse(
            r#"{"tool_name": "Bash", "tool_input": {"command": "ls"}, "session_id": 12}"#,
        )
        .unwrap()
        .resolve();
        assert_eq!(request.tool_name, "Bash");
        assert_eq!(request.tool_input["command"], "ls");
        assert_eq!(request.session_id, "unknown");
    }

    #[test]
    fn test_malformed_inputs() {
        for raw in ["", "   \n", "not json", "[1, 2]", "\"Bash\"", "null", "{\"tool_name\": "] {
            let err = ActionRequest::parse(raw).unwrap_err();
            assert!(
                matches!(err, BridgeError::MalformedInput(_)),
                "{:?} should be malformed, got {:?}",
                raw,
                err
            );
        }
    }
}
