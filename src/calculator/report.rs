//! Per-room and household energy reports

use super::{co2, monthly_kwh, round2, room_kwh, tiered_bill};
use crate::catalog;
use crate::inventory::{HomeInventory, RoomInventory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Energy and emissions of one appliance line in a room
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplianceUsage {
    /// Number of units
    pub count: u32,
    /// Monthly energy use in kWh
    pub kwh: f64,
    /// Monthly CO2 in kg
    pub co2_kg: f64,
}

/// Derived figures for one room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    /// Room name
    pub name: String,
    /// Deduplicated inventory the figures were computed from
    pub inventory: RoomInventory,
    /// Per-appliance breakdown
    pub breakdown: BTreeMap<String, ApplianceUsage>,
    /// Room energy use in kWh
    pub total_kwh: f64,
    /// Room CO2 in kg
    pub total_co2_kg: f64,
    /// What the room alone would be billed under the slab tariff
    pub bill: f64,
}

/// Household totals, computed once on the aggregate kWh
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeTotals {
    /// Total energy use in kWh
    pub total_kwh: f64,
    /// Total CO2 in kg
    pub total_co2_kg: f64,
    /// Total monthly bill
    pub total_bill: f64,
}

/// Report for every room plus household totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeReport {
    /// Room reports in inventory order
    pub rooms: Vec<RoomReport>,
    /// Household totals
    pub totals: HomeTotals,
}

impl HomeReport {
    /// Find a room report by name
    pub fn room(&self, name: &str) -> Option<&RoomReport> {
        self.rooms.iter().find(|room| room.name == name)
    }
}

/// Appliance ids in a room that the catalog does not know
pub fn unknown_appliances(inventory: &RoomInventory) -> Vec<&str> {
    inventory
        .keys()
        .map(String::as_str)
        .filter(|id| catalog::lookup(id).is_none())
        .collect()
}

fn room_report(name: &str, inventory: &RoomInventory) -> RoomReport {
    for appliance in unknown_appliances(inventory) {
        log::warn!(
            "unknown appliance '{}' in '{}' contributes 0 kWh",
            appliance,
            name
        );
    }

    let total_kwh = room_kwh(inventory);
    let breakdown = inventory
        .iter()
        .map(|(appliance, &count)| {
            let kwh = monthly_kwh(appliance, count);
            (
                appliance.clone(),
                ApplianceUsage {
                    count,
                    kwh,
                    co2_kg: co2(kwh),
                },
            )
        })
        .collect();

    RoomReport {
        name: name.to_string(),
        inventory: inventory.clone(),
        breakdown,
        total_kwh,
        total_co2_kg: co2(total_kwh),
        bill: tiered_bill(total_kwh),
    }
}

/// Build the full report for an assembled inventory
///
/// The household bill is the slab tariff applied to the summed room kWh,
/// not the sum of room bills.
///
/// # Examples
///
/// ```
/// use home_carbon::calculator::full_report;
/// use home_carbon::inventory::{assemble, HomeInventory, Room};
///
/// let raw = HomeInventory::new(vec![
///     Room::new("Kitchen", [("refrigerator", 1)]),
///     Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
/// ]);
/// let report = full_report(&assemble(&raw));
///
/// assert_eq!(report.totals.total_kwh, 234.0);
/// assert_eq!(report.totals.total_bill, 282.0);
/// ```
pub fn full_report(assembled: &HomeInventory) -> HomeReport {
    let rooms: Vec<RoomReport> = assembled
        .rooms
        .iter()
        .map(|room| room_report(&room.name, &room.appliances))
        .collect();

    let total_kwh = round2(rooms.iter().map(|room| room.total_kwh).sum());
    log::debug!(
        "report covers {} rooms, {} kWh total",
        rooms.len(),
        total_kwh
    );

    HomeReport {
        rooms,
        totals: HomeTotals {
            total_kwh,
            total_co2_kg: co2(total_kwh),
            total_bill: tiered_bill(total_kwh),
        },
    }
}
