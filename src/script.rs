//! Key scripts
//!
//! A small line-based format for replaying key events without a window:
//!
//! ```text
//! # comments and blank lines are skipped
//! type lamp color 00ff00_
//! enter
//! down ShiftLeft
//! press Backspace
//! up 16
//! ```
//!
//! Key names are DOM codes or legacy numeric key codes. `type` assumes caps
//! lock is off and holds `ShiftLeft` around shifted characters.

use crate::input::{self, KeyEvent};

/// Error reading a key script
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl ScriptError {
    fn at(line: usize, message: impl Into<String>) -> Self {
        ScriptError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Parse a script into key events
pub fn parse(script: &str) -> Result<Vec<KeyEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in script.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (verb, rest) = match trimmed.split_once(' ') {
            Some((verb, rest)) => (verb, rest),
            None => (trimmed, ""),
        };

        match verb {
            "down" => events.push(KeyEvent::down(key_name(rest, line_no)?)),
            "up" => events.push(KeyEvent::up(key_name(rest, line_no)?)),
            "press" => {
                let code = key_name(rest, line_no)?;
                events.push(KeyEvent::down(code.clone()));
                events.push(KeyEvent::up(code));
            }
            "enter" if rest.trim().is_empty() => {
                events.push(KeyEvent::down("Enter"));
                events.push(KeyEvent::up("Enter"));
            }
            "type" => {
                let typed = events_for_text(rest)
                    .map_err(|c| ScriptError::at(line_no, format!("no key types {:?}", c)))?;
                events.extend(typed);
            }
            _ => return Err(ScriptError::at(line_no, format!("unknown verb {:?}", verb))),
        }
    }

    Ok(events)
}

/// Key events that type `text` on a keyboard with caps lock off.
///
/// Fails with the first character no key can produce.
pub fn events_for_text(text: &str) -> Result<Vec<KeyEvent>, char> {
    let mut events = Vec::with_capacity(text.len() * 2);
    for c in text.chars() {
        let (code, shift) = input::code_for_char(c).ok_or(c)?;
        if shift {
            events.push(KeyEvent::down("ShiftLeft"));
        }
        events.push(KeyEvent::down(code));
        events.push(KeyEvent::up(code));
        if shift {
            events.push(KeyEvent::up("ShiftLeft"));
        }
    }
    Ok(events)
}

fn key_name(arg: &str, line_no: usize) -> Result<String, ScriptError> {
    let name = arg.trim();
    if name.is_empty() {
        return Err(ScriptError::at(line_no, "missing key name"));
    }
    if name.contains(char::is_whitespace) {
        return Err(ScriptError::at(line_no, format!("bad key name {:?}", name)));
    }

    match name.parse::<u32>() {
        Ok(which) => input::legacy_code(which)
            .map(str::to_string)
            .ok_or_else(|| ScriptError::at(line_no, format!("unknown key code {}", which))),
        Err(_) => Ok(name.to_string()),
    }
}
