//! # Command Grammar
//!
//! One command per input line, tokens separated by whitespace:
//!
//! ```text
//! create_parking_lot <slots>
//! park <registration> <colour> <vehicle_type>
//! leave <slot>
//! status
//! type_of_vehicles [vehicle_type]
//! registration_numbers_for_vehicles_with_ood_plate
//! registration_numbers_for_vehicles_with_event_plate
//! registration_numbers_for_vehicles_with_colour <colour>
//! exit
//! ```
//!
//! Keywords are case-sensitive. Tokens past the last expected argument are ignored.
//! A blank line has no keyword and is an invalid command like any other.

use crate::error::{ParklotError, Result};
use std::str::FromStr;

pub const CREATE_PARKING_LOT: &str = "create_parking_lot";
pub const PARK: &str = "park";
pub const LEAVE: &str = "leave";
pub const STATUS: &str = "status";
pub const TYPE_OF_VEHICLES: &str = "type_of_vehicles";
pub const ODD_PLATE: &str = "registration_numbers_for_vehicles_with_ood_plate";
pub const EVEN_PLATE: &str = "registration_numbers_for_vehicles_with_event_plate";
pub const WITH_COLOUR: &str = "registration_numbers_for_vehicles_with_colour";
pub const EXIT: &str = "exit";

const KEYWORDS: &[&str] = &[
    CREATE_PARKING_LOT,
    PARK,
    LEAVE,
    STATUS,
    TYPE_OF_VEHICLES,
    ODD_PLATE,
    EVEN_PLATE,
    WITH_COLOUR,
    EXIT,
];

/// Usage lines shown by the interactive menu, in display order.
pub const USAGE: &[&str] = &[
    "create_parking_lot [total_slots]",
    "park [registration_number] [color] [vehicle_type]",
    "leave [slot_number]",
    "status",
    "type_of_vehicles [vehicle_type]",
    "registration_numbers_for_vehicles_with_ood_plate",
    "registration_numbers_for_vehicles_with_event_plate",
    "registration_numbers_for_vehicles_with_colour [color]",
    "exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot {
        capacity: u32,
    },
    Park {
        registration_number: String,
        colour: String,
        vehicle_type: String,
    },
    /// Signed so that `leave -1` reaches the lot and reports the slot as empty.
    Leave {
        slot: i64,
    },
    Status,
    /// The argument is accepted for compatibility and otherwise unused.
    TypeOfVehicles {
        vehicle_type: Option<String>,
    },
    OddPlates,
    EvenPlates,
    WithColour {
        colour: String,
    },
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateParkingLot { .. } => CREATE_PARKING_LOT,
            Command::Park { .. } => PARK,
            Command::Leave { .. } => LEAVE,
            Command::Status => STATUS,
            Command::TypeOfVehicles { .. } => TYPE_OF_VEHICLES,
            Command::OddPlates => ODD_PLATE,
            Command::EvenPlates => EVEN_PLATE,
            Command::WithColour { .. } => WITH_COLOUR,
            Command::Exit => EXIT,
        }
    }
}

impl FromStr for Command {
    type Err = ParklotError;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default();
        let name = KEYWORDS
            .iter()
            .copied()
            .find(|k| *k == keyword)
            .ok_or_else(|| ParklotError::UnknownCommand(keyword.to_string()))?;
        let mut args = Args {
            command: name,
            tokens,
        };

        let command = match name {
            CREATE_PARKING_LOT => Command::CreateParkingLot {
                capacity: args.number("total_slots")?,
            },
            PARK => Command::Park {
                registration_number: args.required("registration_number")?,
                colour: args.required("color")?,
                vehicle_type: args.required("vehicle_type")?,
            },
            LEAVE => Command::Leave {
                slot: args.number("slot_number")?,
            },
            STATUS => Command::Status,
            TYPE_OF_VEHICLES => Command::TypeOfVehicles {
                vehicle_type: args.optional(),
            },
            ODD_PLATE => Command::OddPlates,
            EVEN_PLATE => Command::EvenPlates,
            WITH_COLOUR => Command::WithColour {
                colour: args.required("color")?,
            },
            EXIT => Command::Exit,
            _ => unreachable!("keyword table and match arms are out of sync"),
        };
        Ok(command)
    }
}

struct Args<I> {
    command: &'static str,
    tokens: I,
}

impl<'a, I: Iterator<Item = &'a str>> Args<I> {
    fn optional(&mut self) -> Option<String> {
        self.tokens.next().map(str::to_string)
    }

    fn required(&mut self, argument: &'static str) -> Result<String> {
        let command = self.command;
        self.optional()
            .ok_or(ParklotError::MissingArgument { command, argument })
    }

    fn number<T: FromStr>(&mut self, argument: &'static str) -> Result<T> {
        let raw = self.required(argument)?;
        raw.parse().map_err(|_| ParklotError::InvalidNumber {
            argument,
            value: raw,
        })
    }
}
