//! Keyboard Input Module
//!
//! Translates physical key events into characters or control actions for
//! the terminal. Keys are identified by their DOM `KeyboardEvent.code`
//! string (`"KeyA"`, `"Digit1"`, `"ShiftLeft"`, ...), which names the
//! physical key regardless of layout or modifier state.
//!
//! # Modifiers
//!
//! - Shift selects the shifted variant of a key (digit row to symbol row,
//!   letters to uppercase). Shift wins over caps lock for letters.
//! - Caps lock uppercases letters only.
//! - Left and right Shift are tracked separately so releasing one does not
//!   drop a Shift still held on the other side.
//!
//! Legacy numeric key codes (`KeyboardEvent.which`) are accepted through
//! [`KeyEvent::from_legacy`].

mod keycaps;

use serde::{Deserialize, Serialize};

pub use keycaps::{Keycaps, PRESSED_HEIGHT, REST_HEIGHT};

/// Which physical Shift key an action refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftSide {
    Left,
    Right,
}

/// Modifier state owned by the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift_left: bool,
    pub shift_right: bool,
    pub caps_lock: bool,
}

impl Modifiers {
    /// Create modifiers with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// True while either Shift key is down
    pub fn shift_held(&self) -> bool {
        self.shift_left || self.shift_right
    }

    /// Update the modifier state for a translated action.
    ///
    /// Returns true if the action was a modifier action and has been consumed.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::ShiftStart(side) => self.set_shift(side, true),
            KeyAction::ShiftEnd(side) => self.set_shift(side, false),
            KeyAction::CapsLockToggle => self.caps_lock = !self.caps_lock,
            _ => return false,
        }
        true
    }

    fn set_shift(&mut self, side: ShiftSide, held: bool) {
        match side {
            ShiftSide::Left => self.shift_left = held,
            ShiftSide::Right => self.shift_right = held,
        }
    }
}

/// A key event delivered by the host input system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Physical key identifier (DOM `KeyboardEvent.code`)
    pub code: String,
    /// True for key-down, false for key-up
    pub pressed: bool,
}

impl KeyEvent {
    /// Key-down event
    pub fn down(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pressed: true,
        }
    }

    /// Key-up event
    pub fn up(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pressed: false,
        }
    }

    /// Build an event from a legacy numeric key code (`KeyboardEvent.which`).
    ///
    /// Returns `None` for codes without a physical key mapping.
    pub fn from_legacy(which: u32, pressed: bool) -> Option<Self> {
        legacy_code(which).map(|code| Self {
            code: code.to_string(),
            pressed,
        })
    }
}

/// Result of translating a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// A printable character
    Char(char),
    /// Delete the last character (clear everything with Shift held)
    Backspace,
    /// Horizontal tab
    Tab,
    /// Enter: complete the current logical line
    Commit,
    /// Caps lock pressed
    CapsLockToggle,
    /// A Shift key went down
    ShiftStart(ShiftSide),
    /// A Shift key came up
    ShiftEnd(ShiftSide),
    /// No table entry; ignored
    Unmapped,
}

const LETTER_CODES: [&str; 26] = [
    "KeyA", "KeyB", "KeyC", "KeyD", "KeyE", "KeyF", "KeyG", "KeyH", "KeyI", "KeyJ", "KeyK", "KeyL",
    "KeyM", "KeyN", "KeyO", "KeyP", "KeyQ", "KeyR", "KeyS", "KeyT", "KeyU", "KeyV", "KeyW", "KeyX",
    "KeyY", "KeyZ",
];

const DIGIT_CODES: [&str; 10] = [
    "Digit0", "Digit1", "Digit2", "Digit3", "Digit4", "Digit5", "Digit6", "Digit7", "Digit8",
    "Digit9",
];

const NUMPAD_CODES: [&str; 10] = [
    "Numpad0", "Numpad1", "Numpad2", "Numpad3", "Numpad4", "Numpad5", "Numpad6", "Numpad7",
    "Numpad8", "Numpad9",
];

/// Symbols on the shifted digit row, indexed by digit
const DIGIT_SHIFTED: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

/// Punctuation keys: (code, unshifted, shifted)
const PUNCTUATION: [(&str, char, char); 12] = [
    ("Space", ' ', ' '),
    ("Minus", '-', '_'),
    ("Equal", '=', '+'),
    ("BracketLeft", '[', '{'),
    ("BracketRight", ']', '}'),
    ("Backslash", '\\', '|'),
    ("Semicolon", ';', ':'),
    ("Quote", '\'', '"'),
    ("Comma", ',', '<'),
    ("Period", '.', '>'),
    ("Slash", '/', '?'),
    ("Backquote", '`', '~'),
];

/// Keypad operator keys; shift does not change these
const NUMPAD_OPERATORS: [(&str, char); 5] = [
    ("NumpadAdd", '+'),
    ("NumpadSubtract", '-'),
    ("NumpadMultiply", '*'),
    ("NumpadDivide", '/'),
    ("NumpadDecimal", '.'),
];

/// Translate a key-down event into an action
pub fn translate(code: &str, modifiers: Modifiers) -> KeyAction {
    match code {
        "Backspace" => return KeyAction::Backspace,
        "Tab" => return KeyAction::Tab,
        "Enter" | "NumpadEnter" => return KeyAction::Commit,
        "CapsLock" => return KeyAction::CapsLockToggle,
        "ShiftLeft" => return KeyAction::ShiftStart(ShiftSide::Left),
        "ShiftRight" => return KeyAction::ShiftStart(ShiftSide::Right),
        _ => {}
    }

    match printable(code, modifiers) {
        Some(c) => KeyAction::Char(c),
        None => KeyAction::Unmapped,
    }
}

/// Translate a key-up event. Only the Shift keys act on release.
pub fn translate_release(code: &str) -> KeyAction {
    match code {
        "ShiftLeft" => KeyAction::ShiftEnd(ShiftSide::Left),
        "ShiftRight" => KeyAction::ShiftEnd(ShiftSide::Right),
        _ => KeyAction::Unmapped,
    }
}

fn printable(code: &str, modifiers: Modifiers) -> Option<char> {
    let shift = modifiers.shift_held();

    if let Some(index) = LETTER_CODES.iter().position(|&c| c == code) {
        let lower = (b'a' + index as u8) as char;
        let upper = shift || modifiers.caps_lock;
        return Some(if upper {
            lower.to_ascii_uppercase()
        } else {
            lower
        });
    }

    if let Some(index) = DIGIT_CODES.iter().position(|&c| c == code) {
        return Some(if shift {
            DIGIT_SHIFTED[index]
        } else {
            (b'0' + index as u8) as char
        });
    }

    if let Some(index) = NUMPAD_CODES.iter().position(|&c| c == code) {
        return Some((b'0' + index as u8) as char);
    }

    if let Some(&(_, plain, shifted)) = PUNCTUATION.iter().find(|(c, _, _)| *c == code) {
        return Some(if shift { shifted } else { plain });
    }

    NUMPAD_OPERATORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, ch)| ch)
}

/// Map a legacy numeric key code to its physical key identifier.
///
/// Numeric 16 does not say which Shift was pressed; it resolves to `ShiftLeft`.
pub fn legacy_code(which: u32) -> Option<&'static str> {
    let code = match which {
        8 => "Backspace",
        9 => "Tab",
        13 => "Enter",
        16 => "ShiftLeft",
        20 => "CapsLock",
        32 => "Space",
        48..=57 => DIGIT_CODES[(which - 48) as usize],
        65..=90 => LETTER_CODES[(which - 65) as usize],
        96..=105 => NUMPAD_CODES[(which - 96) as usize],
        106 => "NumpadMultiply",
        107 => "NumpadAdd",
        109 => "NumpadSubtract",
        110 => "NumpadDecimal",
        111 => "NumpadDivide",
        186 => "Semicolon",
        187 => "Equal",
        188 => "Comma",
        189 => "Minus",
        190 => "Period",
        191 => "Slash",
        192 => "Backquote",
        219 => "BracketLeft",
        220 => "Backslash",
        221 => "BracketRight",
        222 => "Quote",
        _ => return None,
    };
    Some(code)
}

/// Find the key that types `c` on the main keyboard block.
///
/// Returns the key identifier and whether Shift must be held.
pub fn code_for_char(c: char) -> Option<(&'static str, bool)> {
    match c {
        'a'..='z' => Some((LETTER_CODES[(c as u8 - b'a') as usize], false)),
        'A'..='Z' => Some((LETTER_CODES[(c as u8 - b'A') as usize], true)),
        '0'..='9' => Some((DIGIT_CODES[(c as u8 - b'0') as usize], false)),
        '\t' => Some(("Tab", false)),
        '\n' => Some(("Enter", false)),
        _ => {
            if let Some(index) = DIGIT_SHIFTED.iter().position(|&s| s == c) {
                return Some((DIGIT_CODES[index], true));
            }
            PUNCTUATION.iter().find_map(|&(code, plain, shifted)| {
                if plain == c {
                    Some((code, false))
                } else if shifted == c {
                    Some((code, true))
                } else {
                    None
                }
            })
        }
    }
}
