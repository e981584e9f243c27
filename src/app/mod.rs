//! Application configuration

mod config;

pub use config::{Config, ConfigError, SceneConfig, TerminalConfig};
