//! Styled output lines.
//!
//! Commands describe *what* to emphasize, never *how*. A line is a run of
//! spans tagged with a semantic style; the front-end decides whether that
//! means ANSI colors, HTML, or nothing at all.

use std::fmt;

/// Semantic emphasis of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    Plain,
    /// A `grep` hit.
    Match,
    /// A directory name in a listing.
    Directory,
    /// Command names, labels, logo art.
    Accent,
    /// A diagnostic line.
    Error,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// One line of command output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLine {
    pub spans: Vec<Span>,
}

impl OutputLine {
    /// A line with no spans (renders as a blank line).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, SpanStyle::Plain)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, SpanStyle::Error)
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::empty().with(text, style)
    }

    /// Append a span. Empty text is dropped so lines stay canonical.
    pub fn with(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span { text, style });
        }
    }

    /// Unstyled text of the whole line.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Spans carrying `style`.
    pub fn spans_with(&self, style: SpanStyle) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.style == style)
    }
}

impl From<&str> for OutputLine {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for OutputLine {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_text() {
        let line = OutputLine::plain("hello");
        assert_eq!(line.text(), "hello");
        assert_eq!(line.spans[0].style, SpanStyle::Plain);
    }

    #[test]
    fn builder_concatenates_and_drops_empty() {
        let line = OutputLine::empty()
            .with("a", SpanStyle::Plain)
            .with("", SpanStyle::Match)
            .with("b", SpanStyle::Match);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.text(), "ab");
        assert_eq!(line.to_string(), "ab");
    }

    #[test]
    fn empty_text_is_empty_line() {
        assert!(OutputLine::plain("").is_empty());
        assert_eq!(OutputLine::empty().text(), "");
    }

    #[test]
    fn spans_with_filters_by_style() {
        let line = OutputLine::plain("x")
            .with("y", SpanStyle::Match)
            .with("z", SpanStyle::Match);
        let hits: Vec<&str> = line
            .spans_with(SpanStyle::Match)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(hits, vec!["y", "z"]);
    }

    #[test]
    fn from_conversions() {
        let a: OutputLine = "hi".into();
        let b: OutputLine = String::from("hi").into();
        assert_eq!(a, b);
    }
}
