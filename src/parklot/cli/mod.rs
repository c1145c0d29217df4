//! # CLI Layer
//!
//! This module is **one possible UI client** for parklot, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the logging subscriber
//!
//! ## Sessions
//!
//! `parklot` reads commands from `FILE` when given, otherwise from stdin. When
//! stdin is a terminal (and `--quiet` is not set) the session is interactive: the
//! command menu and a prompt precede every line. Piped or file
//! input prints only command output, which makes scripted runs diffable.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `interpreter`: the read/dispatch/render loop
//! - `render`: `CmdResult` to text
//! - `logging`: tracing subscriber setup

mod interpreter;
mod logging;
mod render;
mod setup;

use clap::Parser;
use interpreter::{Interpreter, SessionOptions};
use parklot::error::{ParklotError, Result};
use parklot::init::initialize;
use setup::Cli;
use std::fs::File;
use std::io::{BufReader, IsTerminal};
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = initialize(cli.config_dir.as_deref())?;
    debug!(config_dir = ?ctx.config_dir, "session initialized");

    let interactive = cli.file.is_none() && !cli.quiet && std::io::stdin().is_terminal();
    let options = SessionOptions {
        use_color: ctx.config.color && !cli.no_color && std::io::stdout().is_terminal(),
        show_menu: interactive && ctx.config.show_menu,
        prompt: interactive.then(|| ctx.config.prompt.clone()),
    };

    let stdout = std::io::stdout();
    let mut interpreter = Interpreter::new(ctx.api, stdout.lock(), options);

    match &cli.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| ParklotError::Input {
                path: path.clone(),
                source,
            })?;
            interpreter.run(BufReader::new(file))
        }
        None => interpreter.run(std::io::stdin().lock()),
    }
}
