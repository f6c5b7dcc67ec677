//! Report command implementation
//!
//! Handles the `home-carbon report` command: load an inventory file, run the
//! estimation pipeline and print the result.

use anyhow::Result;
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::HomeCarbonError;
use crate::inventory::{load_inventory, HomeInventory};
use crate::output::{print_report, DisplayOptions, JsonOutput};
use crate::pipeline::{generate_report, EstimateReport};

/// Build an estimate for an inventory using config defaults
///
/// An inventory without rooms is rejected: a report needs at least one
/// surveyed room.
pub fn estimate(
    inventory: &HomeInventory,
    config: &ConfigFile,
    occupants: Option<u32>,
) -> Result<EstimateReport> {
    if inventory.is_empty() {
        return Err(HomeCarbonError::EmptyInventory.into());
    }
    let occupants = occupants.unwrap_or(config.household.occupants);
    Ok(generate_report(inventory, occupants))
}

/// Print the household estimate for an inventory file
///
/// # Examples
///
/// ```no_run
/// use home_carbon::cmd::report::cmd_report;
/// use std::path::Path;
///
/// // Console report with the configured number of occupants
/// cmd_report(Path::new("home.json"), false, None)?;
///
/// // JSON for a two-person household
/// cmd_report(Path::new("home.toml"), true, Some(2))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_report(file: &Path, json: bool, occupants: Option<u32>) -> Result<()> {
    let config = ConfigLoader::load(&env::current_dir()?)?;
    let inventory = load_inventory(file)?;
    let report = estimate(&inventory, &config, occupants)?;

    if json {
        JsonOutput::new(report).print();
    } else {
        print_report(
            &report,
            DisplayOptions {
                show_empty_rooms: config.report.show_empty_rooms,
            },
        );
    }

    Ok(())
}
