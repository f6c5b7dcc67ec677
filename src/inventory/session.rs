//! Caller-owned inventory state
//!
//! Accumulates per-room detection results, plug-point counts and manual
//! corrections between report runs. The estimator itself keeps no state;
//! whoever drives it owns an `InventorySession` and hands a snapshot to
//! the report pipeline.

use super::{HomeInventory, Room, RoomInventory};
use crate::catalog::PLUG_POINT;
use crate::error::HomeCarbonError;

/// Largest plug-point count accepted for one room
pub const MAX_PLUG_POINTS: u32 = 20;

/// Mutable per-room inventory, rooms kept in first-recorded order
///
/// # Examples
///
/// ```
/// use home_carbon::inventory::{InventorySession, RoomInventory};
///
/// let mut session = InventorySession::new();
/// let detected: RoomInventory = [("tv".to_string(), 1)].into_iter().collect();
/// session.record_detection("Living Room", detected, 3)?;
/// session.set_count("Living Room", "fan", 2);
///
/// let room = session.inventory().room("Living Room").cloned().unwrap();
/// assert_eq!(room.appliances["plug_point"], 3);
/// assert_eq!(room.appliances["fan"], 2);
/// # Ok::<(), home_carbon::error::HomeCarbonError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InventorySession {
    home: HomeInventory,
}

impl InventorySession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a room's inventory with a fresh detection result
    ///
    /// A positive `plug_points` count is stored under the plug-point
    /// identifier. Rooms where nothing was detected are still recorded,
    /// as empty inventories.
    pub fn record_detection(
        &mut self,
        room: &str,
        mut detected: RoomInventory,
        plug_points: u32,
    ) -> Result<(), HomeCarbonError> {
        if plug_points > MAX_PLUG_POINTS {
            return Err(HomeCarbonError::PlugCountOutOfRange {
                room: room.to_string(),
                count: plug_points,
                max: MAX_PLUG_POINTS,
            });
        }
        if plug_points > 0 {
            detected.insert(PLUG_POINT.to_string(), plug_points);
        }

        if detected.is_empty() {
            log::warn!("no appliances detected in '{}'", room);
        }
        *self.room_mut(room) = detected;
        Ok(())
    }

    /// Manually correct one appliance count
    ///
    /// A count of zero removes the appliance from the room. The room is
    /// created if it has not been recorded yet.
    pub fn set_count(&mut self, room: &str, appliance: &str, count: u32) {
        let inventory = self.room_mut(room);
        if count > 0 {
            inventory.insert(appliance.to_string(), count);
        } else {
            inventory.remove(appliance);
        }
    }

    /// Forget a room entirely, returning its inventory if it existed
    pub fn remove_room(&mut self, room: &str) -> Option<RoomInventory> {
        let index = self.home.rooms.iter().position(|r| r.name == room)?;
        Some(self.home.rooms.remove(index).appliances)
    }

    /// Names of recorded rooms in order
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.home.rooms.iter().map(|room| room.name.as_str())
    }

    /// Whether no room has been recorded
    pub fn is_empty(&self) -> bool {
        self.home.is_empty()
    }

    /// Current snapshot of the raw (not yet deduplicated) inventory
    pub fn inventory(&self) -> &HomeInventory {
        &self.home
    }

    /// Consume the session, yielding the raw inventory
    pub fn into_inventory(self) -> HomeInventory {
        self.home
    }

    fn room_mut(&mut self, name: &str) -> &mut RoomInventory {
        let index = match self.home.rooms.iter().position(|r| r.name == name) {
            Some(index) => index,
            None => {
                self.home.rooms.push(Room {
                    name: name.to_string(),
                    appliances: RoomInventory::new(),
                });
                self.home.rooms.len() - 1
            }
        };
        &mut self.home.rooms[index].appliances
    }
}
