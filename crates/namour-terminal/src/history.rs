//! Command history with an up/down recall cursor.
//!
//! The cursor lives in `0..=len`. `len` is the live-editing position: no
//! entry is being recalled. Walking up saturates at the oldest entry, walking
//! down saturates at `len` and yields an empty line there.

/// Ordered, consecutively-deduplicated command history.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command.
    ///
    /// Empty input and a repeat of the newest entry are not stored. The
    /// cursor returns to the live position either way. Returns whether the
    /// entry was appended.
    pub fn record(&mut self, command: &str) -> bool {
        let appended = !command.is_empty()
            && self.entries.last().map(String::as_str) != Some(command);
        if appended {
            self.entries.push(command.to_string());
        }
        self.cursor = self.entries.len();
        appended
    }

    /// Step toward older entries. `None` when the history is empty.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step toward newer entries. Reaching the live position yields `""`.
    /// `None` when the history is empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        Some(self.entries.get(self.cursor).map_or("", String::as_str))
    }

    /// The input line was edited by hand; abandon any recall walk.
    pub fn on_user_edit(&mut self) {
        self.cursor = self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
