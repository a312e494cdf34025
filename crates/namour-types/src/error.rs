//! Error types for the Namour terminal.

use std::io;

/// Errors produced by the Namour terminal.
///
/// The first four variants are shell diagnostics. Their `Display` output is
/// the exact line shown in the transcript, so the dispatcher can render any
/// of them without further formatting.
#[derive(Debug, thiserror::Error)]
pub enum NamourError {
    #[error("{0}: command not found")]
    UnknownCommand(String),

    #[error("{}", no_such_file(.command, .path))]
    PathNotFound { command: String, path: String },

    #[error("{}", no_such_file(.command, .path))]
    WrongNodeType {
        command: String,
        path: String,
        /// Node kind the command needed (`"file"` or `"directory"`).
        expected: &'static str,
    },

    #[error("{0}")]
    Usage(String),

    #[error("VFS error: {0}")]
    Vfs(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl NamourError {
    /// Whether this error is a shell diagnostic that the dispatcher renders
    /// as a transcript line (as opposed to a framework failure).
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand(_)
                | Self::PathNotFound { .. }
                | Self::WrongNodeType { .. }
                | Self::Usage(_)
        )
    }
}

/// `ls` reports unreachable paths GNU-style; every other tool uses the
/// `<tool>: <path>: ...` form.
fn no_such_file(command: &str, path: &str) -> String {
    match command {
        "ls" => format!("ls: cannot access '{path}': No such file or directory"),
        _ => format!("{command}: {path}: No such file or directory"),
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NamourError>;
