use crate::error::{CheckInError, SlotError};
use std::str::FromStr;

/// The kinds of vehicle the lot accepts. Used to vet the type a vehicle is
/// parked with; the vehicle itself keeps the spelling it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    SmallCar,
    Motorbike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 2] = [VehicleType::SmallCar, VehicleType::Motorbike];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::SmallCar => "SmallCar",
            VehicleType::Motorbike => "Motorbike",
        }
    }
}

impl FromStr for VehicleType {
    type Err = CheckInError;

    /// Case-insensitive: "smallcar" and "MOTORBIKE" are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CheckInError::InvalidVehicleType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    vehicle_type: String,
    registration_number: String,
    colour: String,
}

impl Vehicle {
    pub fn new(
        vehicle_type: impl Into<String>,
        registration_number: impl Into<String>,
        colour: impl Into<String>,
    ) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            registration_number: registration_number.into(),
            colour: colour.into(),
        }
    }

    /// The type as it was typed at check-in, e.g. `smallcar`.
    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    #[default]
    Empty,
    Occupied(Vehicle),
}

/// One fixed-numbered space. Numbers start at 1 and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSlot {
    number: usize,
    state: SlotState,
}

impl ParkingSlot {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            state: SlotState::Empty,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self.state, SlotState::Occupied(_))
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        match &self.state {
            SlotState::Occupied(vehicle) => Some(vehicle),
            SlotState::Empty => None,
        }
    }

    /// Parks `vehicle` here. Callers are expected to pick an empty slot.
    pub fn assign(&mut self, vehicle: Vehicle) -> Result<(), SlotError> {
        if self.is_occupied() {
            return Err(SlotError::Occupied(self.number));
        }
        self.state = SlotState::Occupied(vehicle);
        Ok(())
    }

    /// Empties the slot, handing back whatever was parked. No-op when empty.
    pub fn release(&mut self) -> Option<Vehicle> {
        match std::mem::take(&mut self.state) {
            SlotState::Occupied(vehicle) => Some(vehicle),
            SlotState::Empty => None,
        }
    }
}
