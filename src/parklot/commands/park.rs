use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheckInError, Result};
use crate::lot::ParkingLot;
use tracing::{debug, warn};

pub fn run(
    lot: &mut ParkingLot,
    registration_number: &str,
    colour: &str,
    vehicle_type: &str,
) -> Result<CmdResult> {
    let result = match lot.check_in(vehicle_type, registration_number, colour) {
        Ok(slot) => {
            debug!(slot, registration_number, "allocated slot");
            CmdResult::default()
                .with_slot(slot)
                .with_message(CmdMessage::success(format!(
                    "Allocated slot number: {}",
                    slot
                )))
        }
        Err(err @ CheckInError::LotFull) => {
            debug!(registration_number, "lot full, vehicle turned away");
            CmdResult::default().with_message(CmdMessage::warning(err.to_string()))
        }
        Err(err @ CheckInError::InvalidVehicleType(_)) => {
            debug!(vehicle_type, "rejected vehicle type");
            CmdResult::default().with_message(CmdMessage::error(err.to_string()))
        }
        Err(err @ CheckInError::Slot(_)) => {
            warn!(%err, "free slot was taken during check-in");
            CmdResult::default().with_message(CmdMessage::error(err.to_string()))
        }
    };
    Ok(result)
}
