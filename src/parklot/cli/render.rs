//! # Rendering
//!
//! Turns [`CmdResult`]s into the text the interpreter prints. Every function
//! returns a `String` so output can be checked without a terminal; color is
//! applied only when the caller asks for it.

use colored::{ColoredString, Colorize};
use parklot::api::{CmdMessage, CmdResult, MessageLevel};
use parklot::command::USAGE;
use parklot::lot::{StatusRow, TypeCount};

pub const STATUS_HEADER: &str = "Slot\tNo.\tType\tRegistration No\tColour";

/// Renders everything a command produced: status table, type counts, then messages.
pub fn render_result(result: &CmdResult, use_color: bool) -> String {
    let mut output = String::new();
    if let Some(rows) = &result.status_rows {
        output.push_str(&render_status(rows, use_color));
    }
    if let Some(counts) = &result.type_counts {
        output.push_str(&render_type_counts(counts));
    }
    output.push_str(&render_messages(&result.messages, use_color));
    output
}

pub fn render_status(rows: &[StatusRow], use_color: bool) -> String {
    let mut output = format!("{}\n", paint(STATUS_HEADER, use_color, |s| s.bold()));
    for row in rows {
        output.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            row.slot, row.registration_number, row.vehicle_type, row.colour
        ));
    }
    output
}

pub fn render_type_counts(counts: &[TypeCount]) -> String {
    counts
        .iter()
        .map(|c| format!("{}: {}\n", c.vehicle_type, c.count))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.clone(),
                MessageLevel::Success => paint(&message.content, use_color, |s| s.green()),
                MessageLevel::Warning => paint(&message.content, use_color, |s| s.yellow()),
                MessageLevel::Error => paint(&message.content, use_color, |s| s.red()),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_menu() -> String {
    let mut output = String::from("Available Commands:\n");
    for line in USAGE {
        output.push_str(line);
        output.push('\n');
    }
    output
}

fn paint(text: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
