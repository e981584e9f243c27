//! Logical text buffer
//!
//! Holds everything typed since the last hard clear. The buffer only grows
//! at the end and only shrinks from the end (or all at once), so the
//! display lines can always be recomputed from it.
//!
//! There is no length limit; a long session keeps every character.

use serde::{Deserialize, Serialize};

use crate::input::{KeyAction, Modifiers};

/// Outcome of applying a key action to the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// A character was appended
    Inserted(char),
    /// The last character was removed
    Deleted(char),
    /// The whole buffer was cleared
    Cleared,
    /// A newline was appended; carries the logical line it completed
    Committed(String),
    /// Nothing changed
    Unchanged,
}

/// The logical text behind the terminal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// The full logical text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of characters in the buffer
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text typed since the last newline
    pub fn current_line(&self) -> &str {
        match self.text.rfind('\n') {
            Some(pos) => &self.text[pos + 1..],
            None => &self.text,
        }
    }

    /// Append a character. Control characters other than tab and newline
    /// are dropped.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_control() && c != '\t' && c != '\n' {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Append every acceptable character of `s`
    pub fn push_str(&mut self, s: &str) {
        for c in s.chars() {
            self.push(c);
        }
    }

    /// Remove and return the last character
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Hard reset
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Complete the current logical line and return it
    pub fn commit(&mut self) -> String {
        let line = self.current_line().to_string();
        self.text.push('\n');
        line
    }

    /// Apply a translated key action.
    ///
    /// Modifier actions leave the text alone; the caller owns the modifier
    /// state and passes it in so Shift+Backspace can clear the buffer.
    pub fn apply(&mut self, action: KeyAction, modifiers: Modifiers) -> Edit {
        match action {
            KeyAction::Char(c) => {
                if self.push(c) {
                    Edit::Inserted(c)
                } else {
                    Edit::Unchanged
                }
            }
            KeyAction::Tab => {
                self.text.push('\t');
                Edit::Inserted('\t')
            }
            KeyAction::Backspace if modifiers.shift_held() => {
                if self.is_empty() {
                    Edit::Unchanged
                } else {
                    self.clear();
                    Edit::Cleared
                }
            }
            KeyAction::Backspace => match self.pop() {
                Some(c) => Edit::Deleted(c),
                None => Edit::Unchanged,
            },
            KeyAction::Commit => Edit::Committed(self.commit()),
            KeyAction::CapsLockToggle
            | KeyAction::ShiftStart(_)
            | KeyAction::ShiftEnd(_)
            | KeyAction::Unmapped => Edit::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift() -> Modifiers {
        Modifiers {
            shift_left: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_append_and_delete() {
        let mut buf = InputBuffer::new();
        let mods = Modifiers::default();
        assert_eq!(buf.apply(KeyAction::Char('h'), mods), Edit::Inserted('h'));
        buf.apply(KeyAction::Char('i'), mods);
        assert_eq!(buf.as_str(), "hi");

        assert_eq!(buf.apply(KeyAction::Backspace, mods), Edit::Deleted('i'));
        assert_eq!(buf.as_str(), "h");
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut buf = InputBuffer::new();
        assert_eq!(
            buf.apply(KeyAction::Backspace, Modifiers::default()),
            Edit::Unchanged
        );
        assert_eq!(buf.apply(KeyAction::Backspace, shift()), Edit::Unchanged);
    }

    #[test]
    fn test_shift_backspace_clears() {
        let mut buf = InputBuffer::new();
        buf.push_str("line one\nline two");
        assert_eq!(buf.apply(KeyAction::Backspace, shift()), Edit::Cleared);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_backspace_crosses_newline() {
        let mut buf = InputBuffer::new();
        buf.push_str("ab\n");
        buf.apply(KeyAction::Backspace, Modifiers::default());
        assert_eq!(buf.as_str(), "ab");
        assert_eq!(buf.current_line(), "ab");
    }

    #[test]
    fn test_commit_returns_previous_line() {
        let mut buf = InputBuffer::new();
        buf.push_str("hello\nlamp on_");
        assert_eq!(
            buf.apply(KeyAction::Commit, Modifiers::default()),
            Edit::Committed("lamp on_".to_string())
        );
        assert_eq!(buf.as_str(), "hello\nlamp on_\n");
        assert_eq!(buf.current_line(), "");
    }

    #[test]
    fn test_commit_empty_line() {
        let mut buf = InputBuffer::new();
        assert_eq!(
            buf.apply(KeyAction::Commit, Modifiers::default()),
            Edit::Committed(String::new())
        );
        assert_eq!(buf.as_str(), "\n");
    }

    #[test]
    fn test_tab_and_control_filtering() {
        let mut buf = InputBuffer::new();
        buf.apply(KeyAction::Tab, Modifiers::default());
        buf.push('\x1b');
        buf.push('\x07');
        buf.push_str("a\rb");
        assert_eq!(buf.as_str(), "\tab");
    }

    #[test]
    fn test_modifier_actions_do_not_edit() {
        let mut buf = InputBuffer::new();
        buf.push('x');
        let mods = Modifiers::default();
        assert_eq!(buf.apply(KeyAction::CapsLockToggle, mods), Edit::Unchanged);
        assert_eq!(buf.apply(KeyAction::Unmapped, mods), Edit::Unchanged);
        assert_eq!(buf.as_str(), "x");
    }
}
