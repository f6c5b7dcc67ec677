//! Inventory file loading and saving
//!
//! Inventory files list rooms in processing order. JSON:
//!
//! ```json
//! {
//!   "rooms": [
//!     { "name": "Kitchen", "appliances": { "refrigerator": 1 } },
//!     { "name": "Living Room", "appliances": { "fan": 2 }, "plug_points": 3 }
//!   ]
//! }
//! ```
//!
//! TOML uses an array of tables:
//!
//! ```toml
//! [[rooms]]
//! name = "Kitchen"
//! appliances = { refrigerator = 1 }
//! ```

use super::{HomeInventory, InventorySession, RoomInventory};
use crate::error::HomeCarbonError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl FileFormat {
    /// Extensions accepted on input
    pub const SUPPORTED: &'static [&'static str] = &["json", "toml"];

    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, HomeCarbonError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(HomeCarbonError::UnsupportedFormat {
                extension,
                supported: Self::SUPPORTED.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }
}

/// One room as written in an inventory file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntry {
    /// Room name
    pub name: String,
    /// Appliance counts
    #[serde(default)]
    pub appliances: RoomInventory,
    /// Manually counted plug points / outlets (0-20)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub plug_points: u32,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// On-disk inventory document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryFile {
    /// Rooms in processing order
    #[serde(default)]
    pub rooms: Vec<RoomEntry>,
}

impl InventoryFile {
    /// Fold plug-point counts into the room inventories
    ///
    /// Each room name may appear only once.
    pub fn into_inventory(self) -> Result<HomeInventory, HomeCarbonError> {
        let mut session = InventorySession::new();
        for room in self.rooms {
            if session.inventory().room(&room.name).is_some() {
                return Err(HomeCarbonError::DuplicateRoom { room: room.name });
            }
            session.record_detection(&room.name, room.appliances, room.plug_points)?;
        }
        Ok(session.into_inventory())
    }
}

/// Parse inventory text in the given format
pub fn parse_inventory(contents: &str, format: FileFormat) -> Result<InventoryFile, String> {
    match format {
        FileFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        FileFormat::Toml => toml_edit::de::from_str(contents).map_err(|e| e.to_string()),
    }
}

/// Load an inventory file (`.json` or `.toml`)
pub fn load_inventory(path: &Path) -> Result<HomeInventory> {
    load_inventory_with_fs(path, &RealFileSystem)
}

/// Load an inventory file with a custom filesystem implementation
pub fn load_inventory_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<HomeInventory> {
    let format = FileFormat::from_path(path)?;

    let contents = match fs.read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HomeCarbonError::InventoryNotFound {
                path: path.to_path_buf(),
                source: e,
            }
            .into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let file = parse_inventory(&contents, format).map_err(|reason| {
        HomeCarbonError::InvalidInventory {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    log::debug!("loaded {} rooms from {}", file.rooms.len(), path.display());
    Ok(file.into_inventory()?)
}

/// Write an inventory as pretty JSON
pub fn save_inventory_with_fs<FS: FileSystem>(
    inventory: &HomeInventory,
    path: &Path,
    fs: &FS,
) -> Result<()> {
    let contents = to_json(inventory)?;
    fs.write(path, contents)
        .map_err(|source| HomeCarbonError::Io {
            context: format!("writing {}", path.display()),
            source,
        })?;
    Ok(())
}

/// Serialize an inventory in inventory-file layout
pub fn to_json(inventory: &HomeInventory) -> Result<String> {
    let file = InventoryFile {
        rooms: inventory
            .rooms
            .iter()
            .map(|room| RoomEntry {
                name: room.name.clone(),
                appliances: room.appliances.clone(),
                plug_points: 0,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&file).context("Failed to serialize inventory")
}
