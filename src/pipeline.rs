//! Estimation pipeline
//!
//! One synchronous pass over a raw household inventory:
//! 1. assemble (whole-home appliances attributed to one room)
//! 2. total the assembled inventory
//! 3. compute the per-room and household report
//! 4. generate capped suggestions
//! 5. score the per-person impact

use crate::calculator::{full_report, HomeReport};
use crate::impact::{impact_score, potential_savings, ImpactScore, PotentialSavings};
use crate::inventory::{assemble, total_inventory, HomeInventory, TotalInventory};
use crate::suggestions::{generate_suggestions, Suggestion};
use serde::{Deserialize, Serialize};

/// Everything the estimator derives from one household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Per-room figures and household totals
    pub home: HomeReport,
    /// Appliance counts across the assembled inventory
    pub total_inventory: TotalInventory,
    /// Prioritized, capped suggestions
    pub suggestions: Vec<Suggestion>,
    /// Combined savings of all suggestions
    pub potential_savings: PotentialSavings,
    /// Per-person impact score
    pub impact: ImpactScore,
}

/// Run the full estimate for a raw (not yet assembled) inventory
///
/// # Examples
///
/// ```
/// use home_carbon::inventory::{HomeInventory, Room};
/// use home_carbon::pipeline::generate_report;
///
/// let raw = HomeInventory::new(vec![
///     Room::new("Kitchen", [("refrigerator", 1)]),
///     Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
/// ]);
/// let report = generate_report(&raw, 4);
///
/// assert_eq!(report.total_inventory["refrigerator"], 1);
/// assert_eq!(report.home.totals.total_bill, 282.0);
/// ```
pub fn generate_report(raw: &HomeInventory, occupants: u32) -> EstimateReport {
    let assembled = assemble(raw);
    log::debug!("assembled {} rooms", assembled.rooms.len());

    let total = total_inventory(&assembled);
    log::debug!("total inventory: {:?}", total);

    let home = full_report(&assembled);

    let suggestions = generate_suggestions(&total, home.totals.total_kwh);
    log::debug!("generated {} suggestions", suggestions.len());

    let potential_savings = potential_savings(&suggestions, &home.totals);
    let impact = impact_score(&home.totals, occupants);
    log::debug!(
        "impact {} ({:.1} kg CO2 per person)",
        impact.rating,
        impact.co2_per_person_kg
    );

    EstimateReport {
        home,
        total_inventory: total,
        suggestions,
        potential_savings,
        impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::ImpactRating;
    use crate::inventory::Room;

    fn scenario() -> HomeInventory {
        HomeInventory::new(vec![
            Room::new("Kitchen", [("refrigerator", 1)]),
            Room::new("Living Room", [("refrigerator", 1), ("fan", 2)]),
        ])
    }

    #[test]
    fn test_generate_report_dedups_whole_home_appliances() {
        let report = generate_report(&scenario(), 4);

        let living = report.home.room("Living Room").unwrap();
        assert!(!living.inventory.contains_key("refrigerator"));
        assert_eq!(living.inventory["fan"], 2);
        assert_eq!(report.total_inventory["refrigerator"], 1);
        assert_eq!(report.total_inventory["fan"], 2);
    }

    #[test]
    fn test_generate_report_totals_and_impact() {
        let report = generate_report(&scenario(), 4);

        assert_eq!(report.home.totals.total_kwh, 234.0);
        assert_eq!(report.home.totals.total_co2_kg, 191.88);
        assert_eq!(report.home.totals.total_bill, 282.0);
        assert_eq!(report.impact.rating, ImpactRating::Excellent);
    }

    #[test]
    fn test_generate_report_savings_consistent_with_suggestions() {
        let report = generate_report(&scenario(), 4);
        // fans 27 + coils 9 + temperature 7.5 + standby 11.7
        assert_eq!(report.potential_savings.kwh, 55.2);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_generate_report_empty_home() {
        let report = generate_report(&HomeInventory::default(), 4);
        assert_eq!(report.home.totals.total_bill, 30.0);
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.potential_savings.kwh, 0.0);
    }
}
