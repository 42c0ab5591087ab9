//! Typed view of `tool_input` for the tool kinds the bridge knows about.
//!
//! Known kinds get their own parameter record; anything else keeps the raw
//! mapping so new tools still flow through untouched.

use serde_json::{Map, Value};

pub const DEFAULT_COMMAND: &str = "unknown command";
pub const DEFAULT_DESCRIPTION: &str = "No description";
pub const DEFAULT_FILE: &str = "unknown file";

/// What the agent is about to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolAction {
    /// `Bash`: run a shell command.
    Shell(ShellCommand),
    /// `Write` / `Edit`: create or change a file.
    FileWrite { kind: WriteKind, target: FileTarget },
    /// `Read`: read a file.
    FileRead(FileTarget),
    /// Any other tool, with its input as given.
    Other {
        name: String,
        input: Map<String, Value>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellCommand {
    pub command: Option<String>,
    pub description: Option<String>,
}

impl ShellCommand {
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTarget {
    pub file_path: Option<String>,
}

impl FileTarget {
    fn from_input(input: &Map<String, Value>) -> Self {
        Self {
            file_path: string_field(input, "file_path"),
        }
    }

    pub fn file_path(&self) -> &str {
        self.file_path.as_deref().unwrap_or(DEFAULT_FILE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    Write,
    Edit,
}

impl ToolAction {
    /// Classify a tool call by name and pull out the fields its kind needs.
    /// Never fails: unknown names land in `Other`, missing fields stay `None`.
    pub fn from_parts(tool_name: &str, tool_input: &Map<String, Value>) -> Self {
        match tool_name {
            "Bash" => ToolAction::Shell(ShellCommand {
                command: string_field(tool_input, "command"),
                description: string_field(tool_input, "description"),
            }),
            "Write" => ToolAction::FileWrite {
                kind: WriteKind::Write,
                target: FileTarget::from_input(tool_input),
            },
            "Edit" => ToolAction::FileWrite {
                kind: WriteKind::Edit,
                target: FileTarget::from_input(tool_input),
            },
            "Read" => ToolAction::FileRead(FileTarget::from_input(tool_input)),
            other => ToolAction::Other {
                name: other.to_string(),
                input: tool_input.clone(),
            },
        }
    }
}

/// A string-valued field, or `None` if it is missing or not a string.
fn string_field(input: &Map<String, Value>, key: &str) -> Option<String> {
    input.get(key).and_then(|v| v.as_str()).map(str::to_string)
}
