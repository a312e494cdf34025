//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter splits input
//! lines on whitespace, resolves the command name, and dispatches
//! `execute()`. Every failure comes back as a single transcript line.

mod commands;
mod history;
mod interpreter;
mod output;
mod session;
mod system_commands;
mod terminal;
#[cfg(test)]
mod test_utils;
mod text_commands;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Command history with an up/down recall cursor.
pub use history::CommandHistory;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (lines or signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Per-command view of the session and its collaborators.
pub use interpreter::Environment;
/// Styled output model.
pub use output::{OutputLine, Span, SpanStyle};
/// Session state: cwd, transcript, history.
pub use session::{Block, Echo, Prompt, Session};
/// Input-line front-end tying the pieces together.
pub use terminal::Terminal;
