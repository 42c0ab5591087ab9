//! Turns a tool call into the yes/no question a human sees.
//!
//! Embedded values are copied verbatim: no truncation, no escaping. The
//! result is plain text.

use crate::request::tool::ToolAction;
use serde_json::{Map, Value};

/// Build the approval question for a classified tool call.
pub fn build_question(action: &ToolAction) -> String {
    match action {
        ToolAction::Shell(cmd) => format!(
            "Run this shell command?\n\nCommand: {}\nDescription: {}",
            cmd.command(),
            cmd.description()
        ),
        ToolAction::FileWrite { target, .. } => {
            format!("Modify this file?\n\nFile: {}", target.file_path())
        }
        ToolAction::FileRead(target) => format!("Read this file?\n\nFile: {}", target.file_path()),
        ToolAction::Other { name, .. } => format!("Perform the {} action?", name),
    }
}

/// Shortcut for callers holding the raw name and input.
pub fn question_for(tool_name: &str, tool_input: &Map<String, Value>) -> String {
    build_question(&ToolAction::from_parts(tool_name, tool_input))
}
