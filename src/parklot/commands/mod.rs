//! # Command Layer
//!
//! Business logic for each interpreter command, one module per command. Every
//! `run` function takes the lot (or the slot holding it, for `create`), performs
//! exactly one operation and describes the outcome in a [`CmdResult`]:
//! human-readable [`CmdMessage`]s plus whatever structured data the command
//! produced. Outcomes such as a full lot or an empty slot are messages, not errors.
//!
//! Nothing in here writes to stdout.

use crate::lot::{StatusRow, TypeCount};

pub mod colour;
pub mod create;
pub mod leave;
pub mod park;
pub mod plates;
pub mod status;
pub mod vehicle_types;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Slot allocated by `park` or freed by `leave`.
    pub slot: Option<usize>,
    /// Set by `status`; `None` for every other command.
    pub status_rows: Option<Vec<StatusRow>>,
    pub type_counts: Option<Vec<TypeCount>>,
    pub vehicle_count: Option<usize>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_slot(mut self, slot: usize) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_status_rows(mut self, rows: Vec<StatusRow>) -> Self {
        self.status_rows = Some(rows);
        self
    }

    pub fn with_type_counts(mut self, counts: Vec<TypeCount>) -> Self {
        self.type_counts = Some(counts);
        self
    }

    pub fn with_vehicle_count(mut self, count: usize) -> Self {
        self.vehicle_count = Some(count);
        self
    }

    /// True when the command produced nothing to show.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
            && self.status_rows.is_none()
            && self.type_counts.is_none()
            && self.vehicle_count.is_none()
    }
}
