//! Whole-home deduplication and flattening

use super::{HomeInventory, Room, RoomInventory, TotalInventory};
use crate::catalog;
use std::collections::HashSet;

/// Remove repeat sightings of whole-home appliances
///
/// Rooms are processed in order. A whole-home appliance (e.g. the
/// refrigerator) stays only in the first room whose inventory lists it,
/// whatever its count; later rooms drop the entry. Everything else is kept
/// verbatim, and empty rooms stay in the output as empty inventories.
///
/// # Examples
///
/// ```
/// use home_carbon::inventory::{assemble, HomeInventory, Room};
///
/// let raw = HomeInventory::new(vec![
///     Room::new("Kitchen", [("refrigerator", 1)]),
///     Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
/// ]);
/// let assembled = assemble(&raw);
///
/// let living = assembled.room("Living Room").unwrap();
/// assert!(!living.appliances.contains_key("refrigerator"));
/// assert_eq!(living.appliances["fan"], 2);
/// ```
pub fn assemble(raw: &HomeInventory) -> HomeInventory {
    let mut placed: HashSet<&str> = HashSet::new();

    let rooms = raw
        .rooms
        .iter()
        .map(|room| {
            let mut cleaned = RoomInventory::new();
            for (appliance, &count) in &room.appliances {
                if catalog::is_whole_home(appliance) && !placed.insert(appliance.as_str()) {
                    log::debug!(
                        "dropping duplicate whole-home '{}' from room '{}'",
                        appliance,
                        room.name
                    );
                    continue;
                }
                cleaned.insert(appliance.clone(), count);
            }
            Room {
                name: room.name.clone(),
                appliances: cleaned,
            }
        })
        .collect();

    HomeInventory { rooms }
}

/// Sum appliance counts across every room
///
/// Expects an already assembled inventory, so whole-home appliances need
/// no special handling here. Sums saturate at `u32::MAX`.
pub fn total_inventory(assembled: &HomeInventory) -> TotalInventory {
    let mut total = TotalInventory::new();
    for room in &assembled.rooms {
        for (appliance, &count) in &room.appliances {
            let entry = total.entry(appliance.clone()).or_insert(0);
            *entry = entry.saturating_add(count);
        }
    }
    total
}
