use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ParklotError, Result};
use crate::lot::ParkingLot;
use tracing::{info, warn};

/// Installs a fresh lot with `capacity` empty slots, discarding any previous one.
/// If the slots cannot be allocated the previous lot stays in place.
pub fn run(current: &mut Option<ParkingLot>, capacity: u32) -> Result<CmdResult> {
    let requested = capacity as usize;
    let lot = ParkingLot::try_new(requested).map_err(|err| {
        warn!(capacity, %err, "cannot allocate parking lot");
        ParklotError::Capacity(requested)
    })?;

    if let Some(old) = current.replace(lot) {
        info!(
            old_capacity = old.capacity(),
            discarded_vehicles = old.occupied(),
            "replacing parking lot"
        );
    }
    info!(capacity, "created parking lot");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Created a parking lot with {} slots",
        capacity
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_lot_with_requested_capacity() {
        let mut current = None;
        let result = run(&mut current, 6).unwrap();

        let lot = current.unwrap();
        assert_eq!(lot.capacity(), 6);
        assert_eq!(lot.occupied(), 0);
        assert_eq!(
            result.messages[0].content,
            "Created a parking lot with 6 slots"
        );
    }

    #[test]
    fn replaces_existing_lot_wholesale() {
        let mut current = Some(ParkingLot::new(2));
        if let Some(lot) = current.as_mut() {
            lot.check_in("SmallCar", "KA-01", "White").unwrap();
        }

        run(&mut current, 3).unwrap();

        let lot = current.unwrap();
        assert_eq!(lot.capacity(), 3);
        assert_eq!(lot.occupied(), 0);
    }

    #[test]
    fn zero_slots_is_a_valid_lot() {
        let mut current = None;
        run(&mut current, 0).unwrap();
        assert!(current.unwrap().is_full());
    }
}
