//! Odd/even plate listings. The commands are part of the grammar but have no
//! defined behaviour: they succeed and report nothing.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::lot::ParkingLot;

pub fn odd(_lot: &ParkingLot) -> Result<CmdResult> {
    Ok(CmdResult::default())
}

pub fn even(_lot: &ParkingLot) -> Result<CmdResult> {
    Ok(CmdResult::default())
}
