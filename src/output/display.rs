//! Console rendering of estimates

use crate::catalog;
use crate::fmt::{self, format_currency, format_kg, format_kwh};
use crate::pipeline::EstimateReport;
use console::style;
use std::fmt::Write;

/// Console rendering options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Also list rooms with no appliances
    pub show_empty_rooms: bool,
}

/// Render the full estimate as console text
pub fn render_report(report: &EstimateReport, options: DisplayOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, report, options);
    out
}

/// Print the full estimate to stdout
pub fn print_report(report: &EstimateReport, options: DisplayOptions) {
    print!("{}", render_report(report, options));
}

fn write_report(
    out: &mut String,
    report: &EstimateReport,
    options: DisplayOptions,
) -> std::fmt::Result {
    let totals = &report.home.totals;

    writeln!(out, "{} {}", fmt::HOUSE, style("Household Energy Report").bold())?;
    writeln!(out)?;
    writeln!(
        out,
        "   {} Monthly energy: {}",
        fmt::BOLT,
        style(format_kwh(totals.total_kwh)).cyan()
    )?;
    writeln!(
        out,
        "   {} Monthly CO2:    {}",
        fmt::GLOBE,
        style(format_kg(totals.total_co2_kg)).cyan()
    )?;
    writeln!(
        out,
        "   {} Monthly bill:   {}",
        fmt::MONEY,
        style(format_currency(totals.total_bill)).cyan()
    )?;
    writeln!(out)?;

    writeln!(out, "{} {}", fmt::CHART, style("Room Breakdown").bold())?;
    for room in &report.home.rooms {
        if room.inventory.is_empty() && !options.show_empty_rooms {
            continue;
        }
        writeln!(
            out,
            "   {} {} | {} | {}",
            style(&room.name).bold(),
            format_kwh(room.total_kwh),
            format_kg(room.total_co2_kg),
            format_currency(room.bill)
        )?;
        if room.breakdown.is_empty() {
            writeln!(out, "      {}", style("no appliances").dim())?;
        }
        for (appliance, usage) in &room.breakdown {
            writeln!(
                out,
                "      {} {} x{}: {}, {}",
                style("•").dim(),
                catalog::label_for(appliance),
                usage.count,
                format_kwh(usage.kwh),
                format_kg(usage.co2_kg)
            )?;
        }
    }
    writeln!(out)?;

    let savings = &report.potential_savings;
    writeln!(
        out,
        "{} {}",
        fmt::BULB,
        style("Personalised Reduction Suggestions").bold()
    )?;
    writeln!(
        out,
        "   Potential: {:.1} kWh/month | {}{:.1}/month | {:.1} kg CO2/month",
        savings.kwh,
        fmt::CURRENCY,
        savings.bill,
        savings.co2_kg
    )?;
    for (i, suggestion) in report.suggestions.iter().enumerate() {
        writeln!(
            out,
            "   {}. {}{} {} {}",
            i + 1,
            fmt::icon(suggestion.priority.marker()),
            fmt::icon(&suggestion.icon),
            style(suggestion.priority.as_str()).bold(),
            suggestion.action
        )?;
        writeln!(out, "      {}", style(&suggestion.reason).dim())?;
        writeln!(
            out,
            "      saves {:.1} kWh | {}{:.1} | {:.1} kg CO2 per month",
            suggestion.kwh_saved,
            fmt::CURRENCY,
            suggestion.bill_saved,
            suggestion.co2_saved_kg
        )?;
    }
    writeln!(out)?;

    let impact = &report.impact;
    writeln!(out, "{} {}", fmt::SEEDLING, style("Impact Score").bold())?;
    writeln!(
        out,
        "   {} {}",
        fmt::icon(impact.rating.icon()),
        style(impact.rating.label()).bold()
    )?;
    writeln!(out, "   {}", impact.rating.message())?;
    writeln!(
        out,
        "   Monthly CO2 per person: {:.1} kg | Annual: {:.1} kg ({} occupants)",
        impact.co2_per_person_kg, impact.annual_co2_per_person_kg, impact.occupants
    )?;

    Ok(())
}
