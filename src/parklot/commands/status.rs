use crate::commands::CmdResult;
use crate::error::Result;
use crate::lot::ParkingLot;

pub fn run(lot: &ParkingLot) -> Result<CmdResult> {
    Ok(CmdResult::default().with_status_rows(lot.status_report()))
}
