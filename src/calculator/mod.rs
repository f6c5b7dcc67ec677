//! Energy, emissions and billing calculations
//!
//! Converts appliance counts into monthly kWh using the catalog's nominal
//! wattage and daily hours over a 30-day month, kWh into CO2 with a fixed
//! grid emission factor, and kWh into a bill with the slab tariff.

pub mod billing;
pub mod report;

use crate::catalog;
use crate::inventory::RoomInventory;

pub use billing::{tiered_bill, Slab, SlabCharge, TariffSchedule};
pub use report::{
    full_report, unknown_appliances, ApplianceUsage, HomeReport, HomeTotals, RoomReport,
};

/// Grid emission factor in kg CO2 per kWh
pub const CO2_FACTOR: f64 = 0.82;

/// Days in a billing month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 1 decimal place, half away from zero
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Monthly energy use of `count` units of an appliance, in kWh
///
/// Appliances missing from the catalog contribute nothing; reporting them is
/// left to the caller.
///
/// # Examples
///
/// ```
/// use home_carbon::calculator::monthly_kwh;
///
/// assert_eq!(monthly_kwh("refrigerator", 1), 180.0);
/// assert_eq!(monthly_kwh("fan", 2), 54.0);
/// assert_eq!(monthly_kwh("time machine", 3), 0.0);
/// ```
pub fn monthly_kwh(appliance: &str, count: u32) -> f64 {
    let Some(spec) = catalog::lookup(appliance) else {
        return 0.0;
    };
    round2(spec.watts * spec.hours_per_day * DAYS_PER_MONTH * f64::from(count) / 1000.0)
}

/// Monthly energy use of a whole room, in kWh
pub fn room_kwh(inventory: &RoomInventory) -> f64 {
    let total: f64 = inventory
        .iter()
        .map(|(appliance, &count)| monthly_kwh(appliance, count))
        .sum();
    round2(total)
}

/// CO2 emitted for the given energy use, in kg
pub fn co2(kwh: f64) -> f64 {
    round2(kwh * CO2_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_kwh_refrigerator() {
        assert_eq!(monthly_kwh("refrigerator", 1), 180.0);
    }

    #[test]
    fn test_monthly_kwh_fractional_hours() {
        // 800 W * 0.25 h * 30 / 1000
        assert_eq!(monthly_kwh("toaster", 1), 6.0);
        // 1200 W * 0.5 h * 30 / 1000 * 3
        assert_eq!(monthly_kwh("microwave", 3), 54.0);
    }

    #[test]
    fn test_monthly_kwh_zero_count_is_zero() {
        assert_eq!(monthly_kwh("air conditioner", 0), 0.0);
    }

    #[test]
    fn test_monthly_kwh_unknown_appliance_is_zero() {
        assert_eq!(monthly_kwh("dishwasher", 4), 0.0);
    }

    #[test]
    fn test_room_kwh_sums_entries_and_ignores_unknown() {
        let room: RoomInventory = [
            ("fan".to_string(), 2),
            ("plug_point".to_string(), 3),
            ("lava lamp".to_string(), 1),
        ]
        .into_iter()
        .collect();
        // 54.0 + 3 * 3.6
        assert_eq!(room_kwh(&room), 64.8);
        assert_eq!(room_kwh(&RoomInventory::new()), 0.0);
    }

    #[test]
    fn test_co2_uses_emission_factor() {
        assert_eq!(co2(100.0), 82.0);
        assert_eq!(co2(234.0), 191.88);
        assert_eq!(co2(0.0), 0.0);
    }

    #[test]
    fn test_round_helpers() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round1(44.36), 44.4);
        assert_eq!(round1(7.24), 7.2);
    }

    use proptest::prelude::*;

    proptest! {
        /// Property: CO2 is the emission factor times energy, to 2 decimals
        #[test]
        fn prop_co2_linear(kwh in 0.0f64..10_000.0) {
            prop_assert_eq!(co2(kwh), round2(kwh * CO2_FACTOR));
        }

        /// Property: more units of an appliance never use less energy
        #[test]
        fn prop_monthly_kwh_monotonic_in_count(a in 0u32..50, b in 0u32..50) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            for spec in catalog::all() {
                prop_assert!(monthly_kwh(spec.id, low) <= monthly_kwh(spec.id, high));
            }
        }
    }
}
