//! # Parking Lot
//!
//! The lot owns a fixed row of slots numbered `1..=capacity`. Allocation is a
//! linear scan: a check-in always lands in the lowest-numbered empty slot, so a
//! slot freed by a check-out is the next one handed out if nothing lower is free.
//!
//! Nothing here is an error in the `?` sense. A full lot or an unknown vehicle
//! type comes back as [`CheckInError`], and checking out an empty or unknown
//! slot comes back as [`CheckOut::AlreadyEmpty`]; the command layer turns those
//! into messages.

use crate::error::CheckInError;
use crate::model::{ParkingSlot, Vehicle, VehicleType};
use std::collections::TryReserveError;

/// Result of freeing a slot. An empty or out-of-range request echoes the
/// number as given, so `-1` reports back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOut {
    Freed(usize),
    AlreadyEmpty(i64),
}

/// One line of the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub slot: usize,
    pub registration_number: String,
    pub vehicle_type: String,
    pub colour: String,
}

/// Vehicles grouped by the exact type string they were parked with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub vehicle_type: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct ParkingLot {
    slots: Vec<ParkingSlot>,
}

impl ParkingLot {
    /// Builds a lot of `capacity` empty slots. Fails instead of aborting when
    /// the slots cannot be allocated.
    pub fn try_new(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.extend((1..=capacity).map(ParkingSlot::new));
        Ok(Self { slots })
    }

    #[cfg(test)]
    pub(crate) fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[ParkingSlot] {
        &self.slots
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// A zero-capacity lot is always full.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(ParkingSlot::is_occupied)
    }

    /// Parks a vehicle in the lowest-numbered empty slot and returns its number.
    ///
    /// Fullness is checked before the vehicle type, so a full lot reports
    /// [`CheckInError::LotFull`] even for an invalid type. The type is matched
    /// case-insensitively but stored as given.
    pub fn check_in(
        &mut self,
        vehicle_type: &str,
        registration_number: &str,
        colour: &str,
    ) -> Result<usize, CheckInError> {
        let free = self
            .slots
            .iter()
            .position(|slot| !slot.is_occupied())
            .ok_or(CheckInError::LotFull)?;
        vehicle_type.parse::<VehicleType>()?;

        let slot = &mut self.slots[free];
        slot.assign(Vehicle::new(vehicle_type, registration_number, colour))?;
        Ok(slot.number())
    }

    /// Frees `slot_number`. Numbers outside `1..=capacity`, negative ones
    /// included, report [`CheckOut::AlreadyEmpty`].
    pub fn check_out(&mut self, slot_number: i64) -> CheckOut {
        let Some(slot) = self.slot_mut(slot_number) else {
            return CheckOut::AlreadyEmpty(slot_number);
        };
        match slot.release() {
            Some(_) => CheckOut::Freed(slot.number()),
            None => CheckOut::AlreadyEmpty(slot_number),
        }
    }

    /// Occupied slots in ascending slot order.
    pub fn status_report(&self) -> Vec<StatusRow> {
        self.slots
            .iter()
            .filter_map(|slot| {
                slot.vehicle().map(|vehicle| StatusRow {
                    slot: slot.number(),
                    registration_number: vehicle.registration_number().to_string(),
                    vehicle_type: vehicle.vehicle_type().to_string(),
                    colour: vehicle.colour().to_string(),
                })
            })
            .collect()
    }

    /// Occupied slots grouped by exact type string, in first-seen order.
    /// `smallcar` and `SmallCar` are separate groups.
    pub fn count_by_type(&self) -> Vec<TypeCount> {
        let mut counts: Vec<TypeCount> = Vec::new();
        for vehicle in self.slots.iter().filter_map(ParkingSlot::vehicle) {
            let kind = vehicle.vehicle_type();
            match counts.iter_mut().find(|c| c.vehicle_type == kind) {
                Some(entry) => entry.count += 1,
                None => counts.push(TypeCount {
                    vehicle_type: kind.to_string(),
                    count: 1,
                }),
            }
        }
        counts
    }

    pub fn count_by_colour(&self, colour: &str) -> usize {
        let wanted = colour.to_lowercase();
        self.slots
            .iter()
            .filter_map(ParkingSlot::vehicle)
            .filter(|vehicle| vehicle.colour().to_lowercase() == wanted)
            .count()
    }

    fn slot_mut(&mut self, slot_number: i64) -> Option<&mut ParkingSlot> {
        let idx = usize::try_from(slot_number).ok()?.checked_sub(1)?;
        self.slots.get_mut(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot_with(capacity: usize, vehicles: &[(&str, &str, &str)]) -> ParkingLot {
        let mut lot = ParkingLot::new(capacity);
        for (kind, reg, colour) in vehicles {
            lot.check_in(kind, reg, colour).unwrap();
        }
        lot
    }

    fn type_count(kind: &str, count: usize) -> TypeCount {
        TypeCount {
            vehicle_type: kind.to_string(),
            count,
        }
    }

    #[test]
    fn new_lot_has_numbered_empty_slots() {
        for capacity in [0, 1, 5] {
            let lot = ParkingLot::new(capacity);
            assert_eq!(lot.capacity(), capacity);
            let numbers: Vec<_> = lot.slots().iter().map(|s| s.number()).collect();
            assert_eq!(numbers, (1..=capacity).collect::<Vec<_>>());
            assert_eq!(lot.occupied(), 0);
        }
    }

    #[test]
    fn unallocatable_capacity_is_an_error() {
        assert!(ParkingLot::try_new(usize::MAX).is_err());
    }

    #[test]
    fn zero_capacity_lot_is_full() {
        let mut lot = ParkingLot::new(0);
        assert!(lot.is_full());
        assert_eq!(
            lot.check_in("SmallCar", "KA-01", "White"),
            Err(CheckInError::LotFull)
        );
    }

    #[test]
    fn check_in_takes_lowest_free_slot() {
        let mut lot = ParkingLot::new(3);
        assert_eq!(lot.check_in("SmallCar", "KA-01", "White"), Ok(1));
        assert_eq!(lot.check_in("Motorbike", "KA-02", "Black"), Ok(2));
        assert_eq!(lot.check_in("smallcar", "KA-03", "Red"), Ok(3));
        assert!(lot.is_full());
    }

    #[test]
    fn full_lot_reports_full_before_type_check() {
        let mut lot = lot_with(1, &[("SmallCar", "KA-01", "White")]);
        assert_eq!(
            lot.check_in("Truck", "KA-02", "Red"),
            Err(CheckInError::LotFull)
        );
        assert_eq!(lot.status_report().len(), 1);
    }

    #[test]
    fn invalid_type_leaves_lot_unchanged() {
        let mut lot = ParkingLot::new(2);
        assert_eq!(
            lot.check_in("Bus", "KA-01", "White"),
            Err(CheckInError::InvalidVehicleType("Bus".into()))
        );
        assert_eq!(lot.occupied(), 0);
    }

    #[test]
    fn freed_slot_is_reused_when_lowest() {
        let mut lot = lot_with(
            3,
            &[
                ("SmallCar", "KA-01", "White"),
                ("SmallCar", "KA-02", "Black"),
                ("Motorbike", "KA-03", "Red"),
            ],
        );
        assert_eq!(lot.check_out(2), CheckOut::Freed(2));
        assert_eq!(lot.check_in("Motorbike", "KA-04", "Blue"), Ok(2));
    }

    #[test]
    fn check_out_empty_or_unknown_slot_is_already_empty() {
        let mut lot = lot_with(2, &[("SmallCar", "KA-01", "White")]);
        assert_eq!(lot.check_out(1), CheckOut::Freed(1));
        assert_eq!(lot.check_out(1), CheckOut::AlreadyEmpty(1));
        assert_eq!(lot.check_out(0), CheckOut::AlreadyEmpty(0));
        assert_eq!(lot.check_out(99), CheckOut::AlreadyEmpty(99));
    }

    #[test]
    fn check_out_negative_slot_is_already_empty() {
        let mut lot = lot_with(1, &[("SmallCar", "KA-01", "White")]);
        assert_eq!(lot.check_out(-1), CheckOut::AlreadyEmpty(-1));
        assert_eq!(lot.occupied(), 1);
    }

    #[test]
    fn status_report_lists_occupied_slots_in_order() {
        let mut lot = lot_with(
            3,
            &[
                ("SmallCar", "KA-01", "White"),
                ("Motorbike", "KA-02", "Black"),
                ("SmallCar", "KA-03", "Red"),
            ],
        );
        lot.check_out(2);

        let rows = lot.status_report();
        let slots: Vec<_> = rows.iter().map(|r| r.slot).collect();
        assert_eq!(slots, vec![1, 3]);
        assert_eq!(
            rows[1],
            StatusRow {
                slot: 3,
                registration_number: "KA-03".into(),
                vehicle_type: "SmallCar".into(),
                colour: "Red".into(),
            }
        );
    }

    #[test]
    fn status_report_keeps_type_as_typed() {
        let lot = lot_with(2, &[("smallcar", "KA-01", "White")]);
        assert_eq!(lot.status_report()[0].vehicle_type, "smallcar");
    }

    #[test]
    fn count_by_type_uses_first_seen_order() {
        let lot = lot_with(
            4,
            &[
                ("Motorbike", "KA-01", "White"),
                ("SmallCar", "KA-02", "Black"),
                ("Motorbike", "KA-03", "Red"),
            ],
        );
        let counts = lot.count_by_type();
        assert_eq!(
            counts,
            vec![type_count("Motorbike", 2), type_count("SmallCar", 1)]
        );
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), lot.occupied());
    }

    #[test]
    fn count_by_type_separates_spellings() {
        let lot = lot_with(
            2,
            &[("smallcar", "KA-01", "White"), ("SmallCar", "KA-02", "Red")],
        );
        assert_eq!(
            lot.count_by_type(),
            vec![type_count("smallcar", 1), type_count("SmallCar", 1)]
        );
    }

    #[test]
    fn count_by_type_empty_lot_has_no_groups() {
        assert!(ParkingLot::new(3).count_by_type().is_empty());
    }

    #[test]
    fn count_by_colour_ignores_case() {
        let lot = lot_with(
            3,
            &[
                ("SmallCar", "KA-01", "Red"),
                ("Motorbike", "KA-02", "RED"),
                ("SmallCar", "KA-03", "White"),
            ],
        );
        assert_eq!(lot.count_by_colour("Red"), 2);
        assert_eq!(lot.count_by_colour("red"), 2);
        assert_eq!(lot.count_by_colour("Green"), 0);
    }
}
