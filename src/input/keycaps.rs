//! Keycap press state for the rendered keyboard
//!
//! The desk keyboard is a row of caps indexed left to right, top to bottom:
//! Q..P are 0..9, A..L are 10..18, Z..M are 19..25, the space bar is 26 and
//! the two Shift keys are 27 and 28. A pressed cap sits lower than a cap
//! at rest.

use serde::{Deserialize, Serialize};

/// Cap height when the key is up
pub const REST_HEIGHT: f32 = 2.0;
/// Cap height while the key is held
pub const PRESSED_HEIGHT: f32 = 1.5;

const LAYOUT: [&str; 29] = [
    // top row
    "KeyQ", "KeyW", "KeyE", "KeyR", "KeyT", "KeyY", "KeyU", "KeyI", "KeyO", "KeyP",
    // home row
    "KeyA", "KeyS", "KeyD", "KeyF", "KeyG", "KeyH", "KeyJ", "KeyK", "KeyL",
    // bottom row
    "KeyZ", "KeyX", "KeyC", "KeyV", "KeyB", "KeyN", "KeyM",
    "Space", "ShiftLeft", "ShiftRight",
];

/// Pressed/released state of every keycap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keycaps {
    pressed: Vec<bool>,
}

impl Default for Keycaps {
    fn default() -> Self {
        Self::new()
    }
}

impl Keycaps {
    /// All caps at rest
    pub fn new() -> Self {
        Self {
            pressed: vec![false; LAYOUT.len()],
        }
    }

    /// Number of caps on the keyboard
    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    /// Cap index for a key identifier, if the key has a cap
    pub fn index_of(code: &str) -> Option<usize> {
        LAYOUT.iter().position(|&c| c == code)
    }

    /// Update the cap for a key event. Keys without a cap are ignored.
    pub fn set(&mut self, code: &str, pressed: bool) {
        let slot = Self::index_of(code).and_then(|index| self.pressed.get_mut(index));
        if let Some(slot) = slot {
            *slot = pressed;
        }
    }

    pub fn press(&mut self, code: &str) {
        self.set(code, true);
    }

    pub fn release(&mut self, code: &str) {
        self.set(code, false);
    }

    /// Whether the cap at `index` is held down
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    /// Height the renderer should place the cap at
    pub fn height(&self, index: usize) -> f32 {
        if self.is_pressed(index) {
            PRESSED_HEIGHT
        } else {
            REST_HEIGHT
        }
    }

    /// Indices of every held cap, in layout order
    pub fn pressed_indices(&self) -> Vec<usize> {
        self.pressed
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| i)
            .collect()
    }
}
