//! Command trait, registry, and dispatch logic.
//!
//! Input is split on whitespace with no quoting or escaping: the first token
//! names the command, the rest are positional arguments. Names match
//! exactly (case-sensitive).

use std::collections::HashMap;

use namour_platform::TimeService;
use namour_types::config::ShellConfig;
use namour_types::error::{NamourError, Result};
use namour_vfs::FsTree;

use crate::output::{OutputLine, SpanStyle};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Lines to append below the prompt echo.
    Lines(Vec<OutputLine>),
    /// Command produced no visible output.
    None,
    /// Signal to clear the transcript.
    Clear,
}

impl CommandOutput {
    /// Single plain line.
    pub fn line(text: impl Into<String>) -> Self {
        Self::Lines(vec![OutputLine::plain(text)])
    }

    /// Output lines, empty for `None` and `Clear`.
    pub fn into_lines(self) -> Vec<OutputLine> {
        match self {
            Self::Lines(lines) => lines,
            Self::None | Self::Clear => Vec::new(),
        }
    }
}

/// Shared environment passed to every command.
pub struct Environment<'a> {
    /// Current working directory (absolute, normalized).
    pub cwd: String,
    /// The virtual file system (read-only for commands).
    pub fs: &'a FsTree,
    /// Identity and home directory of the session.
    pub config: &'a ShellConfig,
    /// Wall clock for `date`.
    pub time: &'a dyn TimeService,
    /// Previously submitted commands, oldest first.
    pub history: &'a [String],
}

impl Environment<'_> {
    /// Resolve a user-typed path against the cwd and home directory.
    pub fn resolve(&self, input: &str) -> String {
        namour_vfs::resolve_path(&self.cwd, &self.config.home, input)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "ls \[-a\] \[path\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    by_name: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name
    /// (keeping its position in `help`).
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.by_name.get(cmd.name()) {
            Some(&idx) => self.commands[idx] = cmd,
            None => {
                self.by_name
                    .insert(cmd.name().to_string(), self.commands.len());
                self.commands.push(cmd);
            },
        }
    }

    /// Parse and execute a command line.
    ///
    /// Never fails: unknown commands, missing paths, wrong node kinds, and
    /// usage errors all come back as one error-styled line.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> CommandOutput {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return CommandOutput::None;
        };
        let args: Vec<&str> = tokens.collect();

        log::debug!("dispatch {name} {args:?} (cwd {})", env.cwd);
        match self.dispatch(name, &args, env) {
            Ok(output) => output,
            Err(e) => {
                if !e.is_diagnostic() {
                    log::warn!("{name} failed: {e}");
                }
                CommandOutput::Lines(vec![OutputLine::error(e.to_string())])
            },
        }
    }

    fn dispatch(
        &self,
        name: &str,
        args: &[&str],
        env: &mut Environment<'_>,
    ) -> Result<CommandOutput> {
        // `help` needs the registry itself.
        if name == "help" {
            return Ok(self.execute_help());
        }
        match self.by_name.get(name) {
            Some(&idx) => self.commands[idx].execute(args, env),
            None => Err(NamourError::UnknownCommand(name.to_string())),
        }
    }

    /// Built-in help listing every registered command in registration order.
    fn execute_help(&self) -> CommandOutput {
        let mut lines = vec![OutputLine::plain("Available commands:")];
        for cmd in &self.commands {
            lines.push(
                OutputLine::plain("  ")
                    .with(format!("{:<16}", cmd.usage()), SpanStyle::Accent)
                    .with(format!(" - {}", cmd.description()), SpanStyle::Plain),
            );
        }
        CommandOutput::Lines(lines)
    }

    /// Return (name, description) pairs in registration order.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
