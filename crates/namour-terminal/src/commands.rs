//! Built-in commands for the Namour terminal.

use namour_types::error::{NamourError, Result};
use namour_vfs::{EntryKind, FsNode};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::output::{OutputLine, SpanStyle};

/// Register all built-in commands into a registry, in `help` order.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(CatCmd));
    crate::text_commands::register_text_commands(reg);
    reg.register(Box::new(EchoCmd));
    crate::system_commands::register_system_commands(reg);
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Shows this help message."
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // Registered for the listing only; the registry answers `help` itself.
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "Lists files and directories."
    }
    fn usage(&self) -> &str {
        "ls [-a] [path]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let show_all = args.contains(&"-a");
        let target = args.iter().copied().find(|a| !a.starts_with('-'));
        let path = env.resolve(target.unwrap_or(""));

        let entries = env.fs.readdir(&path).ok_or_else(|| {
            let shown = target.unwrap_or(".").to_string();
            match env.fs.lookup(&path) {
                Some(_) => NamourError::WrongNodeType {
                    command: "ls".to_string(),
                    path: shown,
                    expected: "directory",
                },
                None => NamourError::PathNotFound {
                    command: "ls".to_string(),
                    path: shown,
                },
            }
        })?;

        let mut line = OutputLine::empty();
        for entry in entries.iter().filter(|e| show_all || !e.is_hidden()) {
            if !line.is_empty() {
                line.push("  ", SpanStyle::Plain);
            }
            match entry.kind {
                EntryKind::Directory => {
                    line.push(format!("{}/", entry.name), SpanStyle::Directory)
                },
                EntryKind::File => line.push(entry.name.as_str(), SpanStyle::Plain),
            }
        }
        Ok(CommandOutput::Lines(vec![line]))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Changes directory."
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let typed = args.first().copied().unwrap_or("~");
        let target = env.resolve(typed);
        match env.fs.lookup(&target) {
            Some(FsNode::Dir(_)) => {
                env.cwd = target;
                Ok(CommandOutput::None)
            },
            Some(FsNode::File(_)) => Err(NamourError::WrongNodeType {
                command: "cd".to_string(),
                path: typed.to_string(),
                expected: "directory",
            }),
            None => Err(NamourError::PathNotFound {
                command: "cd".to_string(),
                path: typed.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> &str {
        "pwd"
    }
    fn description(&self) -> &str {
        "Prints the working directory."
    }
    fn usage(&self) -> &str {
        "pwd"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::line(env.cwd.clone()))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Displays file content."
    }
    fn usage(&self) -> &str {
        "cat [file]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(&typed) = args.first() else {
            return Err(NamourError::Usage("usage: cat [file]".to_string()));
        };
        let content = read_file("cat", typed, env)?;
        Ok(CommandOutput::Lines(
            content.split('\n').map(OutputLine::plain).collect(),
        ))
    }
}

/// Resolve `typed` and return the file's content, or the diagnostic `command`
/// should print.
pub(crate) fn read_file<'a>(
    command: &str,
    typed: &str,
    env: &Environment<'a>,
) -> Result<&'a str> {
    let path = env.resolve(typed);
    match env.fs.lookup(&path) {
        Some(FsNode::File(content)) => Ok(content.as_str()),
        Some(FsNode::Dir(_)) => Err(NamourError::WrongNodeType {
            command: command.to_string(),
            path: typed.to_string(),
            expected: "file",
        }),
        None => Err(NamourError::PathNotFound {
            command: command.to_string(),
            path: typed.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Prints text."
    }
    fn usage(&self) -> &str {
        "echo [text]"
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::line(args.join(" ")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clears the terminal screen."
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
