//! Namour terminal console entry point.
//!
//! Reads command lines from stdin, runs them through the shell emulator, and
//! prints the output with ANSI styling when stdout is a terminal. End of
//! input (Ctrl-D) quits.

mod render;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

use namour_terminal::Terminal;
use namour_types::config::ShellConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, NAMOUR_CONFIG env var, or defaults.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NAMOUR_CONFIG").ok())
    {
        Some(path) => ShellConfig::load(Path::new(&path))
            .with_context(|| format!("loading config {path}"))?,
        None => ShellConfig::default(),
    };
    log::info!("Starting Namour terminal as {}@{}", config.user, config.host);

    let mut terminal = Terminal::from_config(config)?;
    let color = io::stdout().is_terminal();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for block in &terminal.session().transcript {
        for line in &block.lines {
            writeln!(out, "{}", render::render_line(line, color))?;
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = String::new();
    loop {
        write!(out, "{}", render::render_prompt(&terminal.prompt(), color))?;
        out.flush()?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = buf.trim_end_matches(['\n', '\r']);

        let lines = terminal.submit(line);
        // Only `clear` leaves the transcript empty after a submit.
        if terminal.session().transcript.is_empty() {
            if color {
                write!(out, "\x1b[2J\x1b[H")?;
            }
            continue;
        }
        for l in &lines {
            writeln!(out, "{}", render::render_line(l, color))?;
        }
    }

    log::info!(
        "Session ended after {} commands",
        terminal.session().history.len()
    );
    Ok(())
}
