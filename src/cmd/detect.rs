//! Detect command implementation
//!
//! Handles the `home-carbon detect` command which turns precomputed
//! detector output into an inventory file.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::fmt::{CHECKMARK, WARNING};
use crate::infra::RealFileSystem;
use crate::inventory::loader::{save_inventory_with_fs, to_json};
use crate::vision::load_detections;

/// Convert a detections file into an inventory
///
/// Prints the inventory as JSON, or writes it to `output` when given.
/// `threshold` falls back to the configured confidence threshold.
///
/// # Examples
///
/// ```no_run
/// use home_carbon::cmd::detect::cmd_detect;
/// use std::path::Path;
///
/// cmd_detect(Path::new("detections.json"), Some(0.5), Some(Path::new("home.json")))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_detect(file: &Path, threshold: Option<f64>, output: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(&env::current_dir()?)?;
    let threshold = threshold.unwrap_or(config.detection.confidence_threshold);

    let detections = load_detections(file)?;
    let inventory = detections.into_inventory(threshold)?;

    for room in inventory.rooms.iter().filter(|room| room.is_empty()) {
        eprintln!(
            "{} No appliances detected in {}",
            WARNING,
            style(&room.name).yellow()
        );
    }

    match output {
        Some(path) => {
            save_inventory_with_fs(&inventory, path, &RealFileSystem)?;
            eprintln!(
                "{} Wrote {} rooms to {}",
                CHECKMARK,
                inventory.rooms.len(),
                style(path.display()).cyan().bold()
            );
        }
        None => println!("{}", to_json(&inventory)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::load_inventory;

    #[test]
    fn test_cmd_detect_writes_loadable_inventory() {
        let temp = tempfile::tempdir().unwrap();
        let input = temp.path().join("detections.json");
        let output = temp.path().join("home.json");
        std::fs::write(
            &input,
            r#"{"rooms": [{"name": "Kitchen", "plug_points": 1,
                "photos": [[{"class": "refrigerator", "confidence": 0.9},
                            {"class": "microwave", "confidence": 0.2}]]}]}"#,
        )
        .unwrap();

        cmd_detect(&input, Some(0.35), Some(&output)).unwrap();

        let home = load_inventory(&output).unwrap();
        let kitchen = home.room("Kitchen").unwrap();
        assert_eq!(kitchen.appliances["refrigerator"], 1);
        assert_eq!(kitchen.appliances["plug_point"], 1);
        assert!(!kitchen.appliances.contains_key("microwave"));
    }
}
