//! System information commands: whoami, date, neofetch, sudo, history.

use namour_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::output::{OutputLine, SpanStyle};

/// Register system information commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(NeofetchCmd));
    reg.register(Box::new(SudoCmd));
    reg.register(Box::new(HistoryCmd));
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Shows the current user."
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::line(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Shows the current date."
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let now = env.time.now()?;
        Ok(CommandOutput::line(now.to_string()))
    }
}

// ---------------------------------------------------------------------------
// neofetch
// ---------------------------------------------------------------------------

const LOGO: [&str; 7] = [
    r"        .--.         ",
    r"       |o_o |        ",
    r"       |:_/ |        ",
    r"      //   \ \       ",
    r"     (|     | )      ",
    r"    /'_   _/`\      ",
    r"    \___)=(___/      ",
];

const LOGO_WIDTH: usize = 21;

const FACTS: [(&str, &str); 7] = [
    ("OS", "Ubuntu 22.04.3 LTS"),
    ("Host", "VirtualBox 1.2"),
    ("Kernel", "5.15.0-78-generic"),
    ("Uptime", "3 days, 14 hours"),
    ("Shell", "bash 5.1.16"),
    ("CPU", "Intel Xeon E5-2673 v3"),
    ("Memory", "4.2GiB / 16.0GiB"),
];

struct NeofetchCmd;
impl Command for NeofetchCmd {
    fn name(&self) -> &str {
        "neofetch"
    }
    fn description(&self) -> &str {
        "Shows system info."
    }
    fn usage(&self) -> &str {
        "neofetch"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let title = format!("{}@{}", env.config.user, env.config.host);
        let mut info = vec![
            OutputLine::styled(title.as_str(), SpanStyle::Accent),
            OutputLine::plain("-".repeat(title.chars().count())),
        ];
        info.extend(FACTS.iter().map(|(label, value)| {
            OutputLine::styled(*label, SpanStyle::Accent)
                .with(format!(": {value}"), SpanStyle::Plain)
        }));

        let rows = LOGO.len().max(info.len());
        let mut info = info.into_iter();
        let lines = (0..rows)
            .map(|i| {
                let art = LOGO.get(i).copied().unwrap_or("");
                let mut line = OutputLine::styled(
                    format!("{art:<width$}", width = LOGO_WIDTH),
                    SpanStyle::Accent,
                );
                if let Some(right) = info.next() {
                    line.push("  ", SpanStyle::Plain);
                    line.spans.extend(right.spans);
                }
                line
            })
            .collect();
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// sudo
// ---------------------------------------------------------------------------

struct SudoCmd;
impl Command for SudoCmd {
    fn name(&self) -> &str {
        "sudo"
    }
    fn description(&self) -> &str {
        "Execute a command as another user."
    }
    fn usage(&self) -> &str {
        "sudo"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        // Never escalates, never runs the wrapped command.
        Ok(CommandOutput::line(format!(
            "[sudo] password for {}: Sorry, try again.",
            env.config.user
        )))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Shows command history."
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if env.history.is_empty() {
            return Ok(CommandOutput::line("(no history)"));
        }
        let lines = env
            .history
            .iter()
            .enumerate()
            .map(|(i, entry)| OutputLine::plain(format!("  {:4}  {entry}", i + 1)))
            .collect();
        Ok(CommandOutput::Lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::register_builtins;
    use crate::test_utils::{Fixture, texts};

    fn setup() -> (CommandRegistry, Fixture) {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        (reg, Fixture::new())
    }

    fn run(fx: &Fixture, reg: &CommandRegistry, line: &str) -> Vec<OutputLine> {
        fx.run(reg, "/", line).0.into_lines()
    }

    #[test]
    fn whoami_is_config_user() {
        let (reg, mut fx) = setup();
        assert_eq!(texts(&run(&fx, &reg, "whoami")), vec!["namour"]);
        fx.config.user = "root".into();
        assert_eq!(texts(&run(&fx, &reg, "whoami")), vec!["root"]);
    }

    #[test]
    fn date_reads_the_clock() {
        let (reg, fx) = setup();
        assert_eq!(
            texts(&run(&fx, &reg, "date")),
            vec!["Sat Oct 17 14:30:45 UTC 2026"]
        );
    }

    #[test]
    fn sudo_always_fails() {
        let (reg, fx) = setup();
        assert_eq!(
            texts(&run(&fx, &reg, "sudo rm -rf /")),
            vec!["[sudo] password for namour: Sorry, try again."]
        );
        assert!(fx.fs.exists("/home"));
    }

    #[test]
    fn neofetch_places_info_beside_logo() {
        let (reg, fx) = setup();
        let out = run(&fx, &reg, "neofetch");
        assert_eq!(out.len(), 9);
        let text = texts(&out);
        assert!(text[0].starts_with("        .--."));
        assert!(text[0].ends_with("  namour@ubuntu-prod-01"));
        assert!(text[1].ends_with("  ---------------------"));
        assert!(text[2].ends_with("OS: Ubuntu 22.04.3 LTS"));
        assert!(text[8].ends_with("Memory: 4.2GiB / 16.0GiB"));
        // Rows below the art keep the info column aligned.
        assert_eq!(text[8].find("Memory"), Some(LOGO_WIDTH + 2));
        assert_eq!(text[2].find("OS"), Some(LOGO_WIDTH + 2));
    }

    #[test]
    fn neofetch_labels_are_accented() {
        let (reg, fx) = setup();
        let out = run(&fx, &reg, "neofetch");
        let accents: Vec<&str> = out[3]
            .spans_with(SpanStyle::Accent)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(accents.last(), Some(&"Host"));
    }

    #[test]
    fn history_numbers_entries() {
        let (reg, mut fx) = setup();
        fx.history = vec!["ls".into(), "pwd".into()];
        assert_eq!(
            texts(&run(&fx, &reg, "history")),
            vec!["     1  ls", "     2  pwd"]
        );
    }

    #[test]
    fn history_when_empty() {
        let (reg, fx) = setup();
        assert_eq!(texts(&run(&fx, &reg, "history")), vec!["(no history)"]);
    }
}
