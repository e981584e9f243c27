//! Deskterm Library
//!
//! The text terminal behind the monitor in the 3D desk scene. Key events go
//! in; a wrapped scrollback window, scene settings and a screen-glow value
//! come out. The renderer is not part of this crate.
//!
//! - `input`: physical key translation, modifier state, keycap state
//! - `core`: logical text buffer, line wrapping, feedback, snapshots
//! - `command`: command grammar and the settings it drives
//! - `terminal`: the session object tying it together
//! - `script`: key scripts for headless replay
//! - `app`: configuration

pub mod app;
pub mod command;
pub mod core;
pub mod input;
pub mod script;
pub mod terminal;

pub use app::Config;
pub use core::Snapshot;
pub use terminal::Terminal;
