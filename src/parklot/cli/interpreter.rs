//! # Interpreter
//!
//! The line dispatcher: read a line, parse it into a [`Command`], hand it to the
//! [`ParkingApi`] and write the rendered result. Input and output are generic so
//! the same loop serves a terminal, a command file, or a test buffer.
//!
//! A bad line never ends the session. Parse errors and commands issued before a
//! lot exists are printed like any other message and the loop moves on; only
//! I/O failures on the streams themselves are returned. `exit` or end of input
//! ends the session. A blank line is an invalid command like any other.
//!
//! Interactive sessions print the command menu and the prompt before every line.

use super::render::{render_menu, render_messages, render_result};
use parklot::api::{CmdMessage, ParkingApi};
use parklot::command::Command;
use parklot::error::{ParklotError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub use_color: bool,
    /// Print the menu before every line.
    pub show_menu: bool,
    /// Written before every line when set (interactive sessions only).
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Interpreter<W: Write> {
    api: ParkingApi,
    out: W,
    options: SessionOptions,
}

impl<W: Write> Interpreter<W> {
    pub fn new(api: ParkingApi, out: W, options: SessionOptions) -> Self {
        Self { api, out, options }
    }

    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = String::new();
        loop {
            if self.options.show_menu {
                write!(self.out, "{}", render_menu())?;
            }
            if let Some(prompt) = &self.options.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }
            if self.handle_line(&line)? == Flow::Exit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(line, error = %err, "unparseable line");
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        if command == Command::Exit {
            debug!("exit requested");
            return Ok(Flow::Exit);
        }

        match self.api.execute(&command) {
            Ok(result) if result.is_empty() => debug!(command = command.name(), "no output"),
            Ok(result) => write!(self.out, "{}", render_result(&result, self.options.use_color))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    pub fn api(&self) -> &ParkingApi {
        &self.api
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn report(&mut self, err: &ParklotError) -> Result<()> {
        let message = CmdMessage::error(err.to_string());
        write!(
            self.out,
            "{}",
            render_messages(&[message], self.options.use_color)
        )?;
        Ok(())
    }
}
