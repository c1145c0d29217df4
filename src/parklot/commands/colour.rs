use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lot::ParkingLot;

/// Counts parked vehicles of `colour`, echoing the colour as it was typed.
pub fn run(lot: &ParkingLot, colour: &str) -> Result<CmdResult> {
    let count = lot.count_by_colour(colour);
    Ok(CmdResult::default()
        .with_vehicle_count(count)
        .with_message(CmdMessage::info(format!(
            "Total {} vehicles: {}",
            colour, count
        ))))
}
