//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every parking operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the current lot, absent until the first
//!   `create_parking_lot` and replaced wholesale by every later one
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! Every operation except [`ParkingApi::create_parking_lot`] fails with
//! [`ParklotError::NoLot`] while no lot exists.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `lot.rs`
//! - **I/O operations**: No stdout, stderr, or terminal handling
//! - **Parsing**: Input lines become [`Command`]s before they reach here

use crate::command::Command;
use crate::commands;
use crate::error::{ParklotError, Result};
use crate::lot::ParkingLot;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ParkingApi {
    lot: Option<ParkingLot>,
}

impl ParkingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    /// Runs one parsed command. `exit` is a session concern and produces an
    /// empty result here; the interpreter decides when to stop.
    pub fn execute(&mut self, command: &Command) -> Result<commands::CmdResult> {
        debug!(command = command.name(), "executing");
        match command {
            Command::CreateParkingLot { capacity } => self.create_parking_lot(*capacity),
            Command::Park {
                registration_number,
                colour,
                vehicle_type,
            } => self.park(registration_number, colour, vehicle_type),
            Command::Leave { slot } => self.leave(*slot),
            Command::Status => self.status(),
            Command::TypeOfVehicles { .. } => self.type_of_vehicles(),
            Command::OddPlates => self.odd_plates(),
            Command::EvenPlates => self.even_plates(),
            Command::WithColour { colour } => self.vehicles_with_colour(colour),
            Command::Exit => Ok(commands::CmdResult::default()),
        }
    }

    pub fn create_parking_lot(&mut self, capacity: u32) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.lot, capacity)
    }

    pub fn park(
        &mut self,
        registration_number: &str,
        colour: &str,
        vehicle_type: &str,
    ) -> Result<commands::CmdResult> {
        commands::park::run(self.lot_mut()?, registration_number, colour, vehicle_type)
    }

    pub fn leave(&mut self, slot: i64) -> Result<commands::CmdResult> {
        commands::leave::run(self.lot_mut()?, slot)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(self.current()?)
    }

    pub fn type_of_vehicles(&self) -> Result<commands::CmdResult> {
        commands::vehicle_types::run(self.current()?)
    }

    pub fn vehicles_with_colour(&self, colour: &str) -> Result<commands::CmdResult> {
        commands::colour::run(self.current()?, colour)
    }

    pub fn odd_plates(&self) -> Result<commands::CmdResult> {
        commands::plates::odd(self.current()?)
    }

    pub fn even_plates(&self) -> Result<commands::CmdResult> {
        commands::plates::even(self.current()?)
    }

    fn current(&self) -> Result<&ParkingLot> {
        self.lot.as_ref().ok_or(ParklotError::NoLot)
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLot> {
        self.lot.as_mut().ok_or(ParklotError::NoLot)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
