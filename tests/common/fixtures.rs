//! Test fixture helpers for creating inventory and detections files
//!
//! Every fixture lives in its own temporary directory, which doubles as the
//! working directory for CLI runs so no stray config file is picked up.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Kitchen and living room both report a refrigerator
pub const SCENARIO_JSON: &str = r#"{
  "rooms": [
    { "name": "Kitchen", "appliances": { "refrigerator": 1 } },
    { "name": "Living Room", "appliances": { "refrigerator": 1, "fan": 2 } }
  ]
}"#;

/// The same household as [`SCENARIO_JSON`] in TOML
pub const SCENARIO_TOML: &str = r#"
[[rooms]]
name = "Kitchen"
appliances = { refrigerator = 1 }

[[rooms]]
name = "Living Room"
appliances = { refrigerator = 1, fan = 2 }
"#;

/// A heavy household: air conditioning, water heater and solar-worthy usage
pub const HEAVY_JSON: &str = r#"{
  "rooms": [
    { "name": "Bedroom", "appliances": { "air conditioner": 2, "fan": 1, "laptop": 1 } },
    { "name": "Bathroom", "appliances": { "water heater": 1 } },
    { "name": "Kitchen", "appliances": { "refrigerator": 1, "microwave": 1 }, "plug_points": 6 },
    { "name": "Living Room", "appliances": { "tv": 1, "fan": 2, "water heater": 1 } }
  ]
}"#;

/// Detector output for two rooms
pub const DETECTIONS_JSON: &str = r#"{
  "rooms": [
    {
      "name": "Living Room",
      "plug_points": 2,
      "photos": [
        [{ "class": "tv", "confidence": 0.91 }, { "class": "person", "confidence": 0.88 }],
        [{ "class": "tv", "confidence": 0.62 }, { "class": "fan", "confidence": 0.41 },
         { "class": "fan", "confidence": 0.39 }]
      ]
    },
    {
      "name": "Kitchen",
      "photos": [
        [{ "class": "refrigerator", "confidence": 0.97 }, { "class": "toaster", "confidence": 0.2 }]
      ]
    }
  ]
}"#;

/// Write `contents` to `name` inside a fresh temporary directory
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to the file) - the TempDir must be kept alive
pub fn write_file(name: &str, contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join(name);
    fs::write(&path, contents)?;
    Ok((temp_dir, path))
}

/// Write an inventory as `home.json`
pub fn write_inventory_json(contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    write_file("home.json", contents)
}

/// Write an inventory as `home.toml`
pub fn write_inventory_toml(contents: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    write_file("home.toml", contents)
}

/// Write a config file next to the fixture
pub fn write_config(dir: &TempDir, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.path().join(".home-carbon.toml");
    fs::write(&path, contents)?;
    Ok(path)
}
