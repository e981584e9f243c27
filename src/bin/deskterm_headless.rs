//! Headless Terminal Runner
//!
//! Replays a key script through a terminal session without a renderer and
//! writes the final frame snapshot.
//!
//! # Usage
//!
//! ```bash
//! # Replay a script from stdin and print a JSON snapshot
//! printf 'type lamp off_\nenter\n' | deskterm-headless
//!
//! # Replay from a file and print the visible text
//! deskterm-headless --input session.keys --text
//! ```

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deskterm::app::ConfigError;
use deskterm::script::{self, ScriptError};
use deskterm::{Config, Terminal};

/// Command-line arguments
#[derive(Default)]
struct Args {
    /// Key script (stdin if not specified)
    input: Option<PathBuf>,
    /// Output file (stdout if not specified)
    output: Option<PathBuf>,
    /// Configuration file (default location if not specified)
    config: Option<PathBuf>,
    /// Output as text instead of JSON
    text: bool,
    /// Show help
    help: bool,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("script: {0}")]
    Script(#[from] ScriptError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            },
            "-i" | "--input" => {
                i += 1;
                if i < argv.len() {
                    args.input = Some(PathBuf::from(&argv[i]));
                }
            },
            "-o" | "--output" => {
                i += 1;
                if i < argv.len() {
                    args.output = Some(PathBuf::from(&argv[i]));
                }
            },
            "-c" | "--config" => {
                i += 1;
                if i < argv.len() {
                    args.config = Some(PathBuf::from(&argv[i]));
                }
            },
            "-t" | "--text" => {
                args.text = true;
            },
            other => {
                tracing::warn!("Ignoring unknown argument {}", other);
            },
        }
        i += 1;
    }

    args
}

fn print_help() {
    eprintln!(
        r#"deskterm-headless - Replay key scripts through the desk terminal

USAGE:
    deskterm-headless [OPTIONS]

OPTIONS:
    -h, --help              Show this help message
    -i, --input <FILE>      Key script (stdin if not specified)
    -o, --output <FILE>     Output file (stdout if not specified)
    -c, --config <FILE>     Configuration file
    -t, --text              Output visible lines instead of JSON

SCRIPT:
    down <key> | up <key> | press <key> | type <text> | enter
    Keys are DOM codes (KeyA, ShiftLeft) or numeric key codes (65, 16).
"#
    );
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };

    let source = if let Some(path) = &args.input {
        std::fs::read_to_string(path)?
    } else {
        let mut data = String::new();
        io::stdin().read_to_string(&mut data)?;
        data
    };

    let events = script::parse(&source)?;
    tracing::info!("Replaying {} key events", events.len());

    let mut terminal = Terminal::new(&config);
    terminal.handle_keys(&events);

    let snapshot = terminal.snapshot();
    let output = if args.text {
        snapshot.to_text()
    } else {
        snapshot.to_json()?
    };

    if let Some(path) = &args.output {
        let mut file = File::create(path)?;
        file.write_all(output.as_bytes())?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = parse_args();
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
