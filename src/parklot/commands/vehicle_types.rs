use crate::commands::CmdResult;
use crate::error::Result;
use crate::lot::ParkingLot;

pub fn run(lot: &ParkingLot) -> Result<CmdResult> {
    Ok(CmdResult::default().with_type_counts(lot.count_by_type()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_parked_vehicles_by_type() {
        let mut lot = ParkingLot::new(4);
        lot.check_in("SmallCar", "KA-01", "White").unwrap();
        lot.check_in("smallcar", "KA-02", "Black").unwrap();
        lot.check_in("Motorbike", "KA-03", "Red").unwrap();
        lot.check_in("SmallCar", "KA-04", "Blue").unwrap();

        let counts = run(&lot).unwrap().type_counts.unwrap();
        let pairs: Vec<_> = counts
            .iter()
            .map(|c| (c.vehicle_type.as_str(), c.count))
            .collect();
        assert_eq!(pairs, vec![("SmallCar", 2), ("smallcar", 1), ("Motorbike", 1)]);
    }
}
