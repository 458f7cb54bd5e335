mod commands;
mod history;

pub use commands::Command;
pub use history::HistoryStore;

/// Result type for command operations
pub type CommandResult = Result<(), crate::error::EditorError>;
