use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParklotError {
    #[error("Please create a parking lot first.")]
    NoLot,

    #[error("Invalid command.")]
    UnknownCommand(String),

    #[error("Missing argument <{argument}> for {command}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid {argument}: {value}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("Cannot read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot create a parking lot with {0} slots")]
    Capacity(usize),

    #[error("Config error: {0}")]
    Config(String),
}

/// Why a vehicle could not be checked in. These are reported to the user,
/// never propagated out of the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckInError {
    #[error("Sorry, parking lot is full")]
    LotFull,

    #[error("Invalid vehicle type. Only SmallCar and Motorbike are allowed.")]
    InvalidVehicleType(String),

    #[error(transparent)]
    Slot(#[from] SlotError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Slot number {0} is already occupied")]
    Occupied(usize),
}

pub type Result<T> = std::result::Result<T, ParklotError>;
