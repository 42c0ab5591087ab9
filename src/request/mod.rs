pub mod question;
pub mod tool;
pub mod types;

pub use question::{build_question, question_for};
pub use tool::{FileTarget, ShellCommand, ToolAction, WriteKind};
pub use types::*;
