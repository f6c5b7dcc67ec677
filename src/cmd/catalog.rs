//! Catalog listing commands
//!
//! `home-carbon appliances` lists the appliance catalog and
//! `home-carbon rooms` the suggested room names.

use anyhow::Result;
use console::style;

use crate::catalog::ROOM_TYPES;
use crate::fmt::{HOUSE, INFO};
use crate::output::{appliance_entries, print_json};

/// List every catalog appliance with its rating and usage pattern
pub fn cmd_appliances(json: bool) -> Result<()> {
    let entries = appliance_entries();

    if json {
        print_json(&entries);
        return Ok(());
    }

    println!("{}  {}", INFO, style("Appliance Catalog").bold());
    for entry in &entries {
        let marker = if entry.whole_home {
            style("(whole home)").yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "   {} {:<16} {:>6} W {:>5} h/day  {} {}",
            style("•").dim(),
            entry.spec.id,
            entry.spec.watts,
            entry.spec.hours_per_day,
            style(entry.spec.label).dim(),
            marker
        );
    }
    println!();
    println!(
        "   Whole-home appliances are counted once, in the first room that lists them."
    );

    Ok(())
}

/// List the suggested room names
pub fn cmd_rooms() -> Result<()> {
    println!("{} {}", HOUSE, style("Room Types").bold());
    for room in ROOM_TYPES {
        println!("   {} {}", style("•").dim(), room);
    }
    Ok(())
}
