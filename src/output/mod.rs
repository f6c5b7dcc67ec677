//! Report output: JSON for scripts, styled text for the console

pub mod display;
pub mod json;

pub use display::{print_report, render_report, DisplayOptions};
pub use json::{
    appliance_entries, print_json, to_pretty_json, ApplianceEntry, BillOutput, JsonOutput,
};
