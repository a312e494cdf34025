//! Per-session shell state: working directory, transcript, and history.

use std::fmt;

use namour_types::config::ShellConfig;
use namour_vfs::abbreviate_home;

use crate::history::CommandHistory;
use crate::output::OutputLine;

/// The `user@host:path$` prompt shown before each command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub host: String,
    /// Working directory with the home prefix abbreviated to `~`.
    pub path: String,
}

impl Prompt {
    pub fn new(config: &ShellConfig, cwd: &str) -> Self {
        Self {
            user: config.user.clone(),
            host: config.host.clone(),
            path: abbreviate_home(cwd, &config.home),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}$", self.user, self.host, self.path)
    }
}

/// The prompt and raw command echoed above a command's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echo {
    pub prompt: Prompt,
    pub command: String,
}

/// One transcript entry: an optional echo followed by output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// `None` only for the welcome banner.
    pub echo: Option<Echo>,
    pub lines: Vec<OutputLine>,
}

/// Mutable state of one shell session. Nothing here outlives the session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Absolute, normalized, and always an existing directory.
    pub cwd: String,
    pub transcript: Vec<Block>,
    pub history: CommandHistory,
}

impl Session {
    /// Fresh session in the home directory, transcript holding the banner.
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            cwd: config.home.clone(),
            transcript: vec![Block {
                echo: None,
                lines: vec![OutputLine::plain(config.banner.as_str())],
            }],
            history: CommandHistory::new(),
        }
    }

    pub fn prompt(&self, config: &ShellConfig) -> Prompt {
        Prompt::new(config, &self.cwd)
    }

    /// Drop every transcript block. History is untouched.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_home_with_banner() {
        let config = ShellConfig::default();
        let s = Session::new(&config);
        assert_eq!(s.cwd, "/home/namour");
        assert_eq!(s.transcript.len(), 1);
        assert!(s.transcript[0].echo.is_none());
        assert!(s.transcript[0].lines[0].text().starts_with("Welcome to Namour"));
        assert!(s.history.is_empty());
    }

    #[test]
    fn prompt_abbreviates_home() {
        let config = ShellConfig::default();
        assert_eq!(
            Prompt::new(&config, "/home/namour").to_string(),
            "namour@ubuntu-prod-01:~$"
        );
        assert_eq!(
            Prompt::new(&config, "/home/namour/projects").to_string(),
            "namour@ubuntu-prod-01:~/projects$"
        );
        assert_eq!(
            Prompt::new(&config, "/var/log").to_string(),
            "namour@ubuntu-prod-01:/var/log$"
        );
    }

    #[test]
    fn prompt_follows_config_identity() {
        let config = ShellConfig {
            user: "ops".into(),
            host: "db-02".into(),
            home: "/srv/ops".into(),
            ..ShellConfig::default()
        };
        let s = Session::new(&config);
        assert_eq!(s.prompt(&config).to_string(), "ops@db-02:~$");
    }

    #[test]
    fn clear_keeps_history() {
        let config = ShellConfig::default();
        let mut s = Session::new(&config);
        s.history.record("ls");
        s.clear_transcript();
        assert!(s.transcript.is_empty());
        assert_eq!(s.history.entries(), ["ls"]);
    }
}
