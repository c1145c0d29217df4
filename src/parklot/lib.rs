//! # Parklot Architecture
//!
//! Parklot models a parking lot: a fixed row of numbered slots, vehicles checking
//! in and out, and a few reporting queries. It is a **library that happens to
//! have a line-oriented interpreter**, not an interpreter with some library code.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads command lines, renders results, owns the terminal  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Command (command.rs)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the current lot (absent until created)              │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns lot outcomes into messages and structured data     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (lot.rs, model.rs)                                    │
//! │  - Slot allocation and reporting queries                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Outcomes Are Not Errors
//!
//! A full lot, an unknown vehicle type or leaving an empty slot are ordinary
//! outcomes. They come back from the core as values and reach the user as
//! [`commands::CmdMessage`]s. [`error::ParklotError`] is reserved for things
//! the interpreter has to deal with: unparseable lines, commands issued before
//! a lot exists, and I/O or config failures.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`command`]: The line grammar, parsed into [`command::Command`]
//! - [`commands`]: Business logic for each command
//! - [`lot`]: The parking lot and its allocation policy
//! - [`model`]: Vehicles and slots
//! - [`config`]: Interpreter configuration
//! - [`init`]: Session setup
//! - [`error`]: Error types
//! - `cli`: Interpreter loop, rendering and logging for the binary (not part of the lib API)

pub mod api;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod lot;
pub mod model;
