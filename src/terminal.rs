//! Terminal Session
//!
//! Ties together key translation, the logical text buffer, line wrapping
//! and the command interpreter. One `Terminal` owns all session state; the
//! host feeds it key events and reads the window, settings and brightness
//! between events.

use tracing::{debug, trace};

use crate::app::{Config, TerminalConfig};
use crate::command::{CommandInterpreter, Settings};
use crate::core::{feedback, Edit, InputBuffer, ScrollbackWindow, Snapshot};
use crate::input::{self, KeyAction, KeyEvent, Keycaps, Modifiers};

/// A terminal session
#[derive(Debug, Clone)]
pub struct Terminal {
    config: TerminalConfig,
    modifiers: Modifiers,
    keycaps: Keycaps,
    buffer: InputBuffer,
    window: ScrollbackWindow,
    settings: Settings,
    interpreter: CommandInterpreter,
    last_commit: Option<String>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Terminal {
    /// Create a session from a configuration
    pub fn new(config: &Config) -> Self {
        let terminal = config.terminal.clone();
        let window = ScrollbackWindow::from_text(
            "",
            terminal.wrap_width,
            terminal.visible_lines,
            terminal.cursor,
        );
        Self {
            config: terminal,
            modifiers: Modifiers::new(),
            keycaps: Keycaps::new(),
            buffer: InputBuffer::new(),
            window,
            settings: config.scene.initial_settings(),
            interpreter: config.scene.interpreter(),
            last_commit: None,
        }
    }

    /// Current scrollback window, cursor included
    pub fn window(&self) -> &ScrollbackWindow {
        &self.window
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn keycaps(&self) -> &Keycaps {
        &self.keycaps
    }

    /// Everything typed since the last hard clear
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// The most recently committed line, case-folded
    pub fn last_commit(&self) -> Option<&str> {
        self.last_commit.as_deref()
    }

    /// Screen glow for the current window
    pub fn brightness(&self) -> f32 {
        feedback::intensity(self.window.lines(), self.config.brightness_scale)
    }

    /// Consistent view of everything the renderer reads
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_terminal(self)
    }

    /// Process one key event from the host.
    ///
    /// Returns the action the key translated to.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyAction {
        self.keycaps.set(&event.code, event.pressed);

        let action = if event.pressed {
            input::translate(&event.code, self.modifiers)
        } else {
            input::translate_release(&event.code)
        };
        trace!("{:?} -> {:?}", event, action);

        self.apply_action(action);
        action
    }

    /// Process a sequence of key events
    pub fn handle_keys<'a>(&mut self, events: impl IntoIterator<Item = &'a KeyEvent>) {
        for event in events {
            self.handle_key(event);
        }
    }

    /// Apply a translated action
    pub fn apply_action(&mut self, action: KeyAction) {
        if self.modifiers.apply(action) {
            return;
        }

        match self.buffer.apply(action, self.modifiers) {
            Edit::Unchanged => return,
            Edit::Committed(line) => self.commit(line),
            Edit::Cleared => debug!("Buffer cleared"),
            Edit::Inserted(_) | Edit::Deleted(_) => {}
        }
        self.rewrap();
    }

    fn commit(&mut self, line: String) {
        let line = line.to_lowercase();
        debug!("Committed line {:?}", line);

        if let Some(reply) = self.interpreter.on_commit(&line, &mut self.settings) {
            self.buffer.push_str(reply);
            self.buffer.push('\n');
        }
        self.last_commit = Some(line);
    }

    fn rewrap(&mut self) {
        self.window = ScrollbackWindow::from_text(
            self.buffer.as_str(),
            self.config.wrap_width,
            self.config.visible_lines,
            self.config.cursor,
        );
    }
}
