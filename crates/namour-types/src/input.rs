//! Platform-agnostic input event types.
//!
//! Front-ends map their native key events to these enums. The terminal
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A navigation / action key pressed.
    ButtonPress(Button),
    /// Character typed into the input line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
}

/// Keys with a meaning beyond inserting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Arrow up: recall the previous history entry.
    Up,
    /// Arrow down: recall the next history entry.
    Down,
    /// Enter: submit the current line.
    Confirm,
    /// Discard the current line.
    Cancel,
}

impl InputEvent {
    /// Whether this event edits the input line directly (as opposed to
    /// recalling history or submitting).
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::TextInput(_) | Self::Backspace | Self::ButtonPress(Button::Cancel)
        )
    }
}
