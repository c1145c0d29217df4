use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lot::{CheckOut, ParkingLot};
use tracing::debug;

pub fn run(lot: &mut ParkingLot, slot: i64) -> Result<CmdResult> {
    let result = match lot.check_out(slot) {
        CheckOut::Freed(slot) => {
            debug!(slot, "released slot");
            CmdResult::default()
                .with_slot(slot)
                .with_message(CmdMessage::success(format!("Slot number {} is free", slot)))
        }
        CheckOut::AlreadyEmpty(slot) => CmdResult::default().with_message(CmdMessage::info(
            format!("Slot number {} is already empty", slot),
        )),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frees_then_reports_already_empty() {
        let mut lot = ParkingLot::new(2);
        lot.check_in("SmallCar", "KA-01", "White").unwrap();

        let first = run(&mut lot, 1).unwrap();
        assert_eq!(first.slot, Some(1));
        assert_eq!(first.messages[0].content, "Slot number 1 is free");

        let second = run(&mut lot, 1).unwrap();
        assert_eq!(second.slot, None);
        assert_eq!(second.messages[0].content, "Slot number 1 is already empty");
    }

    #[test]
    fn unknown_slot_is_reported_as_empty() {
        let mut lot = ParkingLot::new(2);
        let result = run(&mut lot, 7).unwrap();
        assert_eq!(result.messages[0].content, "Slot number 7 is already empty");
    }

    #[test]
    fn negative_slot_is_reported_as_empty() {
        let mut lot = ParkingLot::new(1);
        lot.check_in("SmallCar", "KA-01", "White").unwrap();

        let result = run(&mut lot, -1).unwrap();
        assert_eq!(result.slot, None);
        assert_eq!(result.messages[0].content, "Slot number -1 is already empty");
        assert_eq!(lot.occupied(), 1);
    }
}
