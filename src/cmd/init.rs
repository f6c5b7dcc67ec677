//! Init command implementation
//!
//! Handles the `home-carbon init` command which writes a default
//! `.home-carbon.toml` into the working directory.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{self, ConfigFile, ConfigLoader};
use crate::fmt::{CHECKMARK, INFO, WARNING};

/// Write the default configuration file
///
/// An existing file is left untouched.
///
/// # Examples
///
/// ```no_run
/// use home_carbon::cmd::init::cmd_init;
///
/// cmd_init()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init() -> Result<()> {
    init_in(&env::current_dir()?)
}

/// Write the default configuration file into `dir`
pub fn init_in(dir: &Path) -> Result<()> {
    if ConfigLoader::exists(dir) {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(config::CONFIG_FILE_NAME).cyan()
        );
        println!("   Delete it first or edit manually to update.");
        return Ok(());
    }

    let defaults = ConfigFile::default();
    ConfigLoader::save(&defaults, dir)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(config::CONFIG_FILE_NAME).cyan().bold()
    );
    println!();
    println!("{}  Defaults:", INFO);
    println!(
        "   {} household.occupants = {}",
        style("•").dim(),
        style(defaults.household.occupants).green()
    );
    println!(
        "   {} detection.confidence-threshold = {}",
        style("•").dim(),
        style(defaults.detection.confidence_threshold).green()
    );
    println!(
        "   {} report.show-empty-rooms = {}",
        style("•").dim(),
        style(defaults.report.show_empty_rooms).green()
    );
    println!();
    println!("{}  Next Steps:", style("💡").bold());
    println!(
        "   1. Run {} to turn detector output into an inventory",
        style("home-carbon detect").cyan()
    );
    println!(
        "   2. Run {} to estimate energy, bill and CO2",
        style("home-carbon report").cyan()
    );

    Ok(())
}
