//! Input-line front-end: ties the tree, the registry, and the session
//! together and turns key events into submitted commands.

use namour_platform::{SystemClock, TimeService};
use namour_types::config::ShellConfig;
use namour_types::error::Result;
use namour_types::input::{Button, InputEvent};
use namour_vfs::{FsTree, build_tree};

use crate::commands::register_builtins;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::output::OutputLine;
use crate::session::{Block, Echo, Prompt, Session};

/// An interactive shell: one session over one read-only tree.
pub struct Terminal {
    fs: FsTree,
    registry: CommandRegistry,
    config: ShellConfig,
    clock: Box<dyn TimeService>,
    session: Session,
    input: String,
}

impl Terminal {
    /// Create a terminal over an already-built tree with all built-ins
    /// registered.
    pub fn new(config: ShellConfig, fs: FsTree, clock: Box<dyn TimeService>) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let session = Session::new(&config);
        log::debug!(
            "Terminal ready: {} commands, cwd {}",
            registry.list_commands().len(),
            session.cwd
        );
        Self {
            fs,
            registry,
            config,
            clock,
            session,
            input: String::new(),
        }
    }

    /// Seed the tree from `config` and read the host clock.
    pub fn from_config(config: ShellConfig) -> Result<Self> {
        let fs = build_tree(&config)?;
        Ok(Self::new(config, fs, Box::new(SystemClock)))
    }

    /// Run one command line: dispatch, append to the transcript, record in
    /// history. Returns the command's output lines.
    pub fn submit(&mut self, line: &str) -> Vec<OutputLine> {
        let prompt = self.prompt();
        let mut env = Environment {
            cwd: self.session.cwd.clone(),
            fs: &self.fs,
            config: &self.config,
            time: self.clock.as_ref(),
            history: self.session.history.entries(),
        };
        let output = self.registry.execute(line, &mut env);
        self.session.cwd = env.cwd;

        let lines = match output {
            CommandOutput::Clear => {
                self.session.clear_transcript();
                Vec::new()
            },
            other => {
                let lines = other.into_lines();
                self.session.transcript.push(Block {
                    echo: Some(Echo {
                        prompt,
                        command: line.to_string(),
                    }),
                    lines: lines.clone(),
                });
                lines
            },
        };
        self.session.history.record(line.trim());
        lines
    }

    /// Feed one input event. Returns the output lines when the event
    /// submitted a command.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<Vec<OutputLine>> {
        match event {
            InputEvent::TextInput(ch) => {
                self.input.push(*ch);
            },
            InputEvent::Backspace => {
                self.input.pop();
            },
            InputEvent::ButtonPress(Button::Cancel) => {
                self.input.clear();
            },
            InputEvent::ButtonPress(Button::Up) => {
                if let Some(entry) = self.session.history.recall_previous() {
                    self.input = entry.to_string();
                }
            },
            InputEvent::ButtonPress(Button::Down) => {
                if let Some(entry) = self.session.history.recall_next() {
                    self.input = entry.to_string();
                }
            },
            InputEvent::ButtonPress(Button::Confirm) => {
                let line = std::mem::take(&mut self.input);
                return Some(self.submit(&line));
            },
        }
        if event.is_edit() {
            self.session.history.on_user_edit();
        }
        None
    }

    /// The line being edited.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Prompt for the current working directory.
    pub fn prompt(&self) -> Prompt {
        self.session.prompt(&self.config)
    }
}
