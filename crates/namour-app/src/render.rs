//! ANSI rendering of transcript lines for a text console.

use namour_terminal::{OutputLine, Prompt, SpanStyle};

const RESET: &str = "\x1b[0m";

/// Escape sequence that opens `style`, or `None` for unstyled text.
fn ansi_for(style: SpanStyle) -> Option<&'static str> {
    match style {
        SpanStyle::Plain => None,
        SpanStyle::Match => Some("\x1b[1;32m"),
        SpanStyle::Directory => Some("\x1b[1;34m"),
        SpanStyle::Accent => Some("\x1b[36m"),
        SpanStyle::Error => Some("\x1b[31m"),
    }
}

/// Render one output line. With `color` off the plain text comes back.
pub fn render_line(line: &OutputLine, color: bool) -> String {
    if !color {
        return line.text();
    }
    let mut out = String::new();
    for span in &line.spans {
        match ansi_for(span.style) {
            Some(code) => {
                out.push_str(code);
                out.push_str(&span.text);
                out.push_str(RESET);
            },
            None => out.push_str(&span.text),
        }
    }
    out
}

/// Render the prompt: `user@host` and the path in their own colors.
pub fn render_prompt(prompt: &Prompt, color: bool) -> String {
    if !color {
        return format!("{prompt} ");
    }
    format!(
        "\x1b[1;36m{}@{}{RESET}:\x1b[32m{}{RESET}$ ",
        prompt.user, prompt.host, prompt.path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rendering_drops_styles() {
        let line = OutputLine::plain("a").with("b", SpanStyle::Match);
        assert_eq!(render_line(&line, false), "ab");
    }

    #[test]
    fn match_spans_are_wrapped() {
        let line = OutputLine::plain("a").with("b", SpanStyle::Match);
        assert_eq!(render_line(&line, true), "a\x1b[1;32mb\x1b[0m");
    }

    #[test]
    fn prompt_without_color() {
        let prompt = Prompt {
            user: "namour".into(),
            host: "ubuntu-prod-01".into(),
            path: "~".into(),
        };
        assert_eq!(render_prompt(&prompt, false), "namour@ubuntu-prod-01:~$ ");
        assert!(render_prompt(&prompt, true).contains("namour@ubuntu-prod-01"));
    }
}
