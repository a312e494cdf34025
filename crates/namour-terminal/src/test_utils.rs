//! Shared fixtures for in-crate tests.

use namour_platform::{SystemTime, TimeService};
use namour_types::config::ShellConfig;
use namour_types::error::Result;
use namour_vfs::{FsTree, build_tree};

use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::output::OutputLine;

/// 2026-10-17 14:30:45 UTC.
pub const FIXED_UNIX_SECS: u64 = 1_792_247_445;

/// Clock frozen at [`FIXED_UNIX_SECS`].
#[derive(Debug, Clone, Copy)]
pub struct FixedClock;

impl TimeService for FixedClock {
    fn now(&self) -> Result<SystemTime> {
        Ok(SystemTime::from_unix_secs(FIXED_UNIX_SECS))
    }
}

/// The stock tree and config plus a history slice.
pub struct Fixture {
    pub fs: FsTree,
    pub config: ShellConfig,
    pub history: Vec<String>,
}

impl Fixture {
    pub fn new() -> Self {
        let config = ShellConfig::default();
        let fs = build_tree(&config).unwrap();
        Self {
            fs,
            config,
            history: Vec::new(),
        }
    }

    pub fn env(&self, cwd: &str) -> Environment<'_> {
        Environment {
            cwd: cwd.to_string(),
            fs: &self.fs,
            config: &self.config,
            time: &FixedClock,
            history: &self.history,
        }
    }

    /// Run `line` from `cwd`, returning the output and the cwd afterwards.
    pub fn run(&self, reg: &CommandRegistry, cwd: &str, line: &str) -> (CommandOutput, String) {
        let mut env = self.env(cwd);
        let out = reg.execute(line, &mut env);
        (out, env.cwd)
    }
}

/// Plain text of each line.
pub fn texts(lines: &[OutputLine]) -> Vec<String> {
    lines.iter().map(OutputLine::text).collect()
}
