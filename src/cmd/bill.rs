//! Bill command implementation
//!
//! Handles the `home-carbon bill` command which prices a number of units
//! under the slab tariff and shows each slab's share.

use anyhow::Result;
use console::style;

use crate::calculator::TariffSchedule;
use crate::fmt::{format_currency, MONEY};
use crate::output::{print_json, BillOutput};

/// Print the tiered bill for `units` kWh
pub fn cmd_bill(units: f64, json: bool) -> Result<()> {
    let bill = BillOutput::new(&TariffSchedule::standard(), units);

    if json {
        print_json(&bill);
        return Ok(());
    }

    println!(
        "{} {} for {} units",
        MONEY,
        style("Monthly bill").bold(),
        style(units).cyan()
    );
    for charge in &bill.slabs {
        let range = match charge.to_units {
            Some(to) => format!("{:>5}-{:<5}", charge.from_units + 1.0, to),
            None => format!("{:>5}+     ", charge.from_units + 1.0),
        };
        println!(
            "   {} {:>8.2} units @ {:.2} = {}",
            style(range).dim(),
            charge.units,
            charge.rate,
            format_currency(charge.amount)
        );
    }
    println!(
        "   {:<11} {}",
        style("fixed").dim(),
        format_currency(bill.fixed_charge)
    );
    println!(
        "   {:<11} {}",
        style("total").bold(),
        style(format_currency(bill.total)).green().bold()
    );

    Ok(())
}
