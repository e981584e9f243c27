//! Command Interpreter
//!
//! When a line is committed it is checked against a small command grammar.
//! Commands are lowercase, space-separated words terminated by `_`:
//!
//! ```text
//! lamp off_
//! lamp on_
//! lamp color <hex>_
//! text color <hex>_
//! time day_
//! time night_
//! globe <body>_
//! ```
//!
//! Matching is case-insensitive and anything after the terminating `_` is
//! ignored. Colours are exactly six hex digits, optionally prefixed with
//! `0x` or `#`. Lines that do not parse leave the settings untouched and
//! produce no reply.

mod settings;

use std::str::FromStr;

use tracing::{debug, info};

pub use settings::{Body, Settings, SkyPreset, DAY_PRESET, NIGHT_PRESET};

/// Time-of-day argument of the `time` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

/// A parsed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LampOff,
    LampOn,
    LampColor(u32),
    TextColor(u32),
    Time(TimeOfDay),
    Globe(Body),
}

/// Why a committed line was not executed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unrecognized command: {0:?}")]
    Unrecognized(String),
    #[error("invalid color literal: {0:?}")]
    InvalidColor(String),
    #[error("unknown body: {0:?}")]
    UnknownBody(String),
}

impl Command {
    /// Parse a committed line
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let folded = line.to_lowercase();
        let Some((body, _)) = folded.split_once('_') else {
            return Err(CommandError::Unrecognized(folded.clone()));
        };

        // Words are separated by exactly one space
        let words: Vec<&str> = body.split(' ').collect();
        match words.as_slice() {
            ["lamp", "off"] => Ok(Command::LampOff),
            ["lamp", "on"] => Ok(Command::LampOn),
            ["lamp", "color", hex] => parse_color(hex).map(Command::LampColor),
            ["text", "color", hex] => parse_color(hex).map(Command::TextColor),
            ["time", "day"] => Ok(Command::Time(TimeOfDay::Day)),
            ["time", "night"] => Ok(Command::Time(TimeOfDay::Night)),
            ["globe", name] => Body::from_name(name)
                .map(Command::Globe)
                .ok_or_else(|| CommandError::UnknownBody(name.to_string())),
            _ => Err(CommandError::Unrecognized(folded.clone())),
        }
    }

    /// Reply appended to the terminal after the command runs
    pub fn confirmation(&self) -> &'static str {
        match self {
            Command::LampOff => "Lamp off.",
            Command::LampOn => "Lamp on.",
            Command::LampColor(_) => "Lamp color changed.",
            Command::TextColor(_) => "Text color changed.",
            Command::Time(TimeOfDay::Day) => "Good morning.",
            Command::Time(TimeOfDay::Night) => "Good night.",
            Command::Globe(_) => "Globe changed.",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parse a 24-bit colour literal: six hex digits, optionally after `0x` or `#`
pub fn parse_color(token: &str) -> Result<u32, CommandError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .or_else(|| token.strip_prefix('#'))
        .unwrap_or(token);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CommandError::InvalidColor(token.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| CommandError::InvalidColor(token.to_string()))
}

/// Executes committed lines against the settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandInterpreter {
    day: SkyPreset,
    night: SkyPreset,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new(DAY_PRESET, NIGHT_PRESET)
    }
}

impl CommandInterpreter {
    /// Create an interpreter with the given sky presets
    pub fn new(day: SkyPreset, night: SkyPreset) -> Self {
        Self { day, night }
    }

    /// Run a command against the settings
    pub fn execute(&self, command: Command, settings: &mut Settings) {
        match command {
            Command::LampOff => settings.lamp_off(),
            Command::LampOn => settings.lamp_on(),
            Command::LampColor(color) => settings.lamp_color = color,
            Command::TextColor(color) => settings.screen_color = color,
            Command::Time(TimeOfDay::Day) => settings.set_sky(self.day, false),
            Command::Time(TimeOfDay::Night) => settings.set_sky(self.night, true),
            Command::Globe(body) => settings.selected_body = body,
        }
    }

    /// Handle a committed line.
    ///
    /// Returns the confirmation text when the line was a valid command.
    /// Anything else is ignored.
    pub fn on_commit(&self, line: &str, settings: &mut Settings) -> Option<&'static str> {
        match Command::parse(line) {
            Ok(command) => {
                self.execute(command, settings);
                info!("Executed {:?}", command);
                Some(command.confirmation())
            }
            Err(e) => {
                debug!("Ignoring committed line: {}", e);
                None
            }
        }
    }
}
