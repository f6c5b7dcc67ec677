//! JSON output formatting for scripting and dashboards

use crate::calculator::{SlabCharge, TariffSchedule};
use crate::catalog::{self, ApplianceSpec};
use crate::pipeline::EstimateReport;
use serde::{Deserialize, Serialize};

/// JSON envelope around a household estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Tool version that produced the estimate
    pub version: String,
    /// The estimate itself
    pub report: EstimateReport,
}

impl JsonOutput {
    /// Wrap a report
    pub fn new(report: EstimateReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        to_pretty_json(self)
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        print_json(self);
    }
}

/// Tiered bill with its per-slab breakdown
#[derive(Debug, Clone, Serialize)]
pub struct BillOutput {
    /// Units (kWh) billed
    pub units: f64,
    /// Charges per slab that received units
    pub slabs: Vec<SlabCharge>,
    /// Fixed monthly charge
    pub fixed_charge: f64,
    /// Total bill
    pub total: f64,
}

impl BillOutput {
    /// Bill `units` under the given tariff
    pub fn new(tariff: &TariffSchedule, units: f64) -> Self {
        Self {
            units,
            slabs: tariff.breakdown(units),
            fixed_charge: tariff.fixed_charge(),
            total: tariff.bill(units),
        }
    }
}

/// Catalog entry for listings
#[derive(Debug, Clone, Serialize)]
pub struct ApplianceEntry {
    /// Catalog data
    #[serde(flatten)]
    pub spec: &'static ApplianceSpec,
    /// Counted once for the whole home
    pub whole_home: bool,
}

/// Every catalog entry in table order
pub fn appliance_entries() -> Vec<ApplianceEntry> {
    catalog::all()
        .map(|spec| ApplianceEntry {
            spec,
            whole_home: catalog::is_whole_home(spec.id),
        })
        .collect()
}

/// Serialize any value as pretty JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
}

/// Print any value as pretty JSON to stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match to_pretty_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error formatting JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HomeInventory, Room};
    use crate::pipeline::generate_report;

    #[test]
    fn test_json_output_contains_report_sections() {
        let raw = HomeInventory::new(vec![Room::new("Kitchen", [("refrigerator", 1)])]);
        let json = JsonOutput::new(generate_report(&raw, 4)).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["report"]["home"]["totals"]["total_kwh"], 180.0);
        assert_eq!(value["report"]["impact"]["rating"], "excellent");
        assert_eq!(value["report"]["suggestions"][0]["priority"], "medium");
    }

    #[test]
    fn test_bill_output_lists_slabs() {
        let bill = BillOutput::new(&TariffSchedule::standard(), 250.0);
        let value: serde_json::Value =
            serde_json::from_str(&to_pretty_json(&bill).unwrap()).unwrap();

        assert_eq!(value["total"], 330.0);
        assert_eq!(value["fixed_charge"], 30.0);
        assert_eq!(value["slabs"].as_array().unwrap().len(), 3);
        assert!(value["slabs"][2]["to_units"].is_number());
    }

    #[test]
    fn test_appliance_entries_flag_whole_home() {
        let entries = appliance_entries();
        assert_eq!(entries.len(), catalog::all().count());

        let value: serde_json::Value =
            serde_json::from_str(&to_pretty_json(&entries).unwrap()).unwrap();
        let fridge = value
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["id"] == "refrigerator")
            .unwrap();
        assert_eq!(fridge["whole_home"], true);
        assert_eq!(fridge["watts"], 250.0);
    }
}
