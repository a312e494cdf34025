//! Text processing commands: grep.

use namour_types::error::{NamourError, Result};

use crate::commands::read_file;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::output::{OutputLine, SpanStyle};

/// Register text processing commands.
pub fn register_text_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(GrepCmd));
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> &str {
        "grep"
    }
    fn description(&self) -> &str {
        "Searches for a pattern in a file."
    }
    fn usage(&self) -> &str {
        "grep [pat] [f]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let (Some(&pattern), Some(&file)) = (args.first(), args.get(1)) else {
            return Err(NamourError::Usage(
                "usage: grep [pattern] [filename]".to_string(),
            ));
        };
        let content = read_file("grep", file, env)?;
        let mut lines: Vec<OutputLine> = content
            .split('\n')
            .filter_map(|line| highlight_matches(line, pattern))
            .collect();
        if lines.is_empty() {
            lines.push(OutputLine::empty());
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// Split `line` into plain and `Match` spans around every case-insensitive,
/// non-overlapping occurrence of `pattern`. Returns `None` when the line has
/// no occurrence.
fn highlight_matches(line: &str, pattern: &str) -> Option<OutputLine> {
    let needle: Vec<char> = pattern.chars().collect();
    if needle.is_empty() {
        return Some(OutputLine::plain(line));
    }
    let hay: Vec<(usize, char)> = line.char_indices().collect();

    let mut out = OutputLine::empty();
    let mut plain_start = 0;
    let mut found = false;
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        let hit = hay[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&(_, h), &n)| chars_eq_ignore_case(h, n));
        if !hit {
            i += 1;
            continue;
        }
        found = true;
        let start = hay[i].0;
        let end = hay.get(i + needle.len()).map_or(line.len(), |&(b, _)| b);
        out.push(&line[plain_start..start], SpanStyle::Plain);
        out.push(&line[start..end], SpanStyle::Match);
        plain_start = end;
        i += needle.len();
    }
    if !found {
        return None;
    }
    out.push(&line[plain_start..], SpanStyle::Plain);
    Some(out)
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
