//! Frame snapshots
//!
//! A snapshot is everything the renderer reads for one frame, taken
//! between key events so it never shows a half-applied edit. Snapshots
//! serialize to JSON for the headless runner and for tests.

use serde::{Deserialize, Serialize};

use crate::command::Settings;
use crate::input::Modifiers;
use crate::terminal::Terminal;

/// Renderer view of a terminal session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Wrap width of the text grid
    pub cols: usize,
    /// Maximum number of visible lines
    pub rows: usize,
    /// Visible lines, cursor included
    pub lines: Vec<String>,
    /// Screen glow
    pub brightness: f32,
    /// Scene settings
    pub settings: Settings,
    /// Modifier state
    pub modifiers: Modifiers,
    /// Indices of held keycaps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pressed_keys: Vec<usize>,
    /// Most recently committed line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<String>,
}

impl Snapshot {
    /// Capture the current state of a terminal
    pub fn from_terminal(terminal: &Terminal) -> Self {
        let config = terminal.config();
        Snapshot {
            cols: config.wrap_width,
            rows: config.visible_lines,
            lines: terminal.window().lines().to_vec(),
            brightness: terminal.brightness(),
            settings: terminal.settings().clone(),
            modifiers: terminal.modifiers(),
            pressed_keys: terminal.keycaps().pressed_indices(),
            last_commit: terminal.last_commit().map(str::to_string),
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Visible lines, one per row
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for line in &self.lines {
            result.push_str(line);
            result.push('\n');
        }
        result
    }

    /// Compare only the visible text of two snapshots
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.lines == other.lines
    }
}
