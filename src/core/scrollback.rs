//! Line wrapping and the scrollback window
//!
//! The logical text is split on newlines and each paragraph is cut into
//! fixed-width slices. There is no word awareness: a word that crosses the
//! right margin is broken mid-word. Only the tail of the wrapped lines is
//! shown; everything else stays in the logical text.

use serde::{Deserialize, Serialize};

/// Wrap `text` into display lines of at most `width` characters.
///
/// Empty paragraphs (consecutive newlines, or a trailing newline) produce
/// empty lines, so the result always has at least one line. A `width` of
/// zero is treated as one.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = String::with_capacity(width);
        let mut count = 0;
        for c in paragraph.chars() {
            if count == width {
                lines.push(std::mem::take(&mut line));
                count = 0;
            }
            line.push(c);
            count += 1;
        }
        lines.push(line);
    }

    lines
}

/// The visible tail of the wrapped logical text, cursor included
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbackWindow {
    lines: Vec<String>,
}

impl ScrollbackWindow {
    /// Wrap `text` at `width`, append the cursor after the last character
    /// and keep the last `rows` lines.
    pub fn from_text(text: &str, width: usize, rows: usize, cursor: char) -> Self {
        let width = width.max(1);
        let mut lines = wrap(text, width);

        // wrap() never returns an empty vector
        let fits = lines
            .last()
            .map(|last| last.chars().count() < width)
            .unwrap_or(false);
        if fits {
            if let Some(last) = lines.last_mut() {
                last.push(cursor);
            }
        } else {
            lines.push(cursor.to_string());
        }

        let skip = lines.len().saturating_sub(rows);
        lines.drain(..skip);

        Self { lines }
    }

    /// Visible lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index from the end (0 = line holding the cursor)
    pub fn get_from_end(&self, index: usize) -> Option<&str> {
        let len = self.lines.len();
        if index >= len {
            return None;
        }
        self.lines.get(len - 1 - index).map(String::as_str)
    }

    /// Lines joined with newlines, for glyph rasterization
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fixed_width() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_wrap_breaks_mid_word() {
        assert_eq!(wrap("hello world", 4), vec!["hell", "o wo", "rld"]);
    }

    #[test]
    fn test_wrap_keeps_empty_paragraphs() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("a\n", 10), vec!["a", ""]);
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("ééé", 2), vec!["éé", "é"]);
    }

    #[test]
    fn test_cursor_on_last_line() {
        let window = ScrollbackWindow::from_text("ab", 3, 15, '_');
        assert_eq!(window.lines(), ["ab_"]);
    }

    #[test]
    fn test_cursor_on_empty_text() {
        let window = ScrollbackWindow::from_text("", 48, 15, '_');
        assert_eq!(window.lines(), ["_"]);
    }

    #[test]
    fn test_cursor_starts_own_line_when_full() {
        let window = ScrollbackWindow::from_text("abc", 3, 15, '_');
        assert_eq!(window.lines(), ["abc", "_"]);
    }

    #[test]
    fn test_cursor_after_newline() {
        let window = ScrollbackWindow::from_text("abc\n", 3, 15, '_');
        assert_eq!(window.lines(), ["abc", "_"]);
    }

    #[test]
    fn test_window_keeps_tail() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let window = ScrollbackWindow::from_text(&text, 48, 5, '_');
        assert_eq!(window.len(), 5);
        assert_eq!(window.lines()[0], "15");
        assert_eq!(window.get_from_end(0), Some("19_"));
        assert_eq!(window.get_from_end(5), None);
    }

    #[test]
    fn test_window_to_text() {
        let window = ScrollbackWindow::from_text("ab\ncd", 48, 15, '_');
        assert_eq!(window.to_text(), "ab\ncd_");
    }
}
