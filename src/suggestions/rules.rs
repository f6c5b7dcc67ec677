//! Suggestion rules
//!
//! Base savings are per-unit monthly estimates; bill figures here are the
//! rule's own estimate and get replaced after capping.

use super::{Priority, Suggestion};
use crate::calculator::CO2_FACTOR;
use crate::inventory::TotalInventory;

/// Rooftop solar is only suggested above this monthly consumption
const SOLAR_THRESHOLD_KWH: f64 = 300.0;

/// Share of consumption a rooftop system offsets
const SOLAR_OFFSET_SHARE: f64 = 0.7;

/// Share of consumption lost to standby power
const STANDBY_SHARE: f64 = 0.05;

/// Retail price per kWh behind the rules' own bill estimates
const RULE_BILL_RATE: f64 = 7.0;

fn count(total: &TotalInventory, appliance: &str) -> f64 {
    f64::from(total.get(appliance).copied().unwrap_or(0))
}

/// Evaluate every rule in order, returning unsorted suggestions
pub(super) fn evaluate(total: &TotalInventory, total_kwh: f64) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let ac = count(total, "air conditioner");
    let fan = count(total, "fan");
    let fridge = count(total, "refrigerator");
    let water_heater = count(total, "water heater");
    let tv = count(total, "tv");
    let laptop = count(total, "laptop");

    if ac > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::High,
            "❄️",
            "Set AC to 24°C instead of 18-20°C",
            "Each 1°C increase saves 6% energy",
            ac * 54.0,
            ac * 44.3,
            ac * 378.0,
        ));
        suggestions.push(Suggestion::new(
            Priority::High,
            "⭐",
            format!("Upgrade {} AC(s) to 5-star BEE rating", ac),
            "5-star uses 30% less power than 3-star",
            ac * 108.0,
            ac * 88.6,
            ac * 756.0,
        ));
    }

    if total_kwh > SOLAR_THRESHOLD_KWH {
        let offset = total_kwh * SOLAR_OFFSET_SHARE;
        suggestions.push(Suggestion::new(
            Priority::High,
            "☀️",
            "Install 2-3 kW rooftop solar panels",
            format!("Your usage ({:?} kWh/month) gives excellent ROI", total_kwh),
            offset,
            offset * CO2_FACTOR,
            offset * RULE_BILL_RATE,
        ));
    }

    if water_heater > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::High,
            "🚿",
            "Replace geyser with solar water heater",
            "Eliminates 90% of water heating electricity",
            54.0,
            44.3,
            378.0,
        ));
    }

    if fan > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "🌀",
            format!("Replace {} fan(s) with BLDC fans", fan),
            "BLDC fans use 50% less power than regular fans",
            fan * 13.5,
            fan * 11.1,
            fan * 94.5,
        ));
    }

    if fridge > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "🧊",
            "Clean refrigerator coils every month",
            "Dirty coils increase consumption by 15%",
            9.0,
            7.4,
            63.0,
        ));
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "🌡️",
            "Set fridge to 3-4°C and freezer to -15°C",
            "Optimal temperature reduces unnecessary cooling",
            7.5,
            6.2,
            52.5,
        ));
    }

    if tv > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::Medium,
            "📺",
            "Enable auto power-off on TV when idle",
            "Standby mode wastes 10W continuously",
            tv * 4.5,
            tv * 3.7,
            tv * 31.5,
        ));
    }

    if laptop > 0.0 {
        suggestions.push(Suggestion::new(
            Priority::Low,
            "💻",
            "Enable sleep mode after 10 mins idle",
            "Sleep uses 90% less power than active mode",
            laptop * 3.5,
            laptop * 2.9,
            laptop * 24.5,
        ));
    }

    let standby = total_kwh * STANDBY_SHARE;
    suggestions.push(Suggestion::new(
        Priority::Low,
        "🔌",
        "Use smart power strips to kill standby power",
        "Standby power wastes 5-10% of total usage",
        standby,
        standby * CO2_FACTOR,
        standby * RULE_BILL_RATE,
    ));

    suggestions
}
