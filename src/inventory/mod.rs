//! Household appliance inventories
//!
//! This module provides:
//! - Room and home inventory types (rooms kept in processing order)
//! - Whole-home deduplication and flattening (`assembler`)
//! - A caller-owned session for accumulating detections and corrections
//! - Inventory file loading (JSON and TOML)

pub mod assembler;
pub mod loader;
pub mod session;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use assembler::{assemble, total_inventory};
pub use loader::{load_inventory, InventoryFile, RoomEntry};
pub use session::{InventorySession, MAX_PLUG_POINTS};

/// Appliance identifier → count for one room
pub type RoomInventory = BTreeMap<String, u32>;

/// Appliance identifier → count across the whole household
pub type TotalInventory = BTreeMap<String, u32>;

/// One named room and what was found in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room name (e.g. "Kitchen")
    pub name: String,
    /// Appliance counts
    #[serde(default)]
    pub appliances: RoomInventory,
}

impl Room {
    /// Create a room from any iterator of (appliance, count) pairs
    pub fn new<I, K>(name: impl Into<String>, appliances: I) -> Self
    where
        I: IntoIterator<Item = (K, u32)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            appliances: appliances
                .into_iter()
                .map(|(id, count)| (id.into(), count))
                .collect(),
        }
    }

    /// Whether the room inventory has no appliance entries
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

/// Rooms of a household in processing order
///
/// Order matters: whole-home appliances are attributed to the first room
/// that reports them.
///
/// # Examples
///
/// ```
/// use home_carbon::inventory::{HomeInventory, Room};
///
/// let home = HomeInventory::new(vec![
///     Room::new("Kitchen", [("refrigerator", 1)]),
///     Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
/// ]);
/// assert_eq!(home.rooms[0].name, "Kitchen");
/// assert_eq!(home.room("Living Room").unwrap().appliances["fan"], 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeInventory {
    /// Rooms in processing order
    pub rooms: Vec<Room>,
}

impl HomeInventory {
    /// Create an inventory from rooms in the given order
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Find a room by name
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// Whether there are no rooms at all
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_new_collects_counts() {
        let room = Room::new("Bedroom", [("fan", 1), ("laptop", 2)]);
        assert_eq!(room.appliances.len(), 2);
        assert_eq!(room.appliances["laptop"], 2);
        assert!(!room.is_empty());
    }

    #[test]
    fn test_home_inventory_lookup_by_name() {
        let home = HomeInventory::new(vec![
            Room::new("Kitchen", [("microwave", 1)]),
            Room::new("Balcony", Vec::<(String, u32)>::new()),
        ]);
        assert!(home.room("Balcony").unwrap().is_empty());
        assert!(home.room("Garage").is_none());
        assert!(!home.is_empty());
        assert!(HomeInventory::default().is_empty());
    }
}
