//! Household impact score
//!
//! Rates the monthly CO2 per occupant in four tiers and sums up what the
//! suggestions could save, limited to 80% of each household total.

use crate::calculator::{round1, HomeTotals};
use crate::suggestions::{Suggestion, MAX_SAVINGS_SHARE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupants assumed when none are configured
pub const DEFAULT_OCCUPANTS: u32 = 4;

/// Impact tier, based on monthly kg CO2 per person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactRating {
    /// Under 50 kg
    Excellent,
    /// 50 to under 100 kg
    Good,
    /// 100 to under 200 kg
    Average,
    /// 200 kg and above
    High,
}

impl ImpactRating {
    /// Rating for a monthly per-person footprint
    pub fn from_co2_per_person(kg: f64) -> Self {
        if kg < 50.0 {
            Self::Excellent
        } else if kg < 100.0 {
            Self::Good
        } else if kg < 200.0 {
            Self::Average
        } else {
            Self::High
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::High => "High",
        }
    }

    /// Icon shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Excellent => "🌟",
            Self::Good => "✅",
            Self::Average => "⚠️",
            Self::High => "🔴",
        }
    }

    /// Advice for the household
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Your household has a very low carbon footprint. Keep it up!",
            Self::Good => {
                "Your carbon footprint is below average. Small improvements can make it excellent."
            }
            Self::Average => "Your footprint is average. Follow the suggestions above to improve.",
            Self::High => "Your footprint is high. Prioritise HIGH suggestions above immediately.",
        }
    }
}

impl fmt::Display for ImpactRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-person footprint and its rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactScore {
    /// Occupants the footprint was divided between
    pub occupants: u32,
    /// Monthly kg CO2 per person
    pub co2_per_person_kg: f64,
    /// Yearly kg CO2 per person
    pub annual_co2_per_person_kg: f64,
    /// Tier
    pub rating: ImpactRating,
}

/// Score a household's CO2 total
///
/// `occupants` of 0 is treated as 1.
///
/// # Examples
///
/// ```
/// use home_carbon::calculator::HomeTotals;
/// use home_carbon::impact::{impact_score, ImpactRating};
///
/// let totals = HomeTotals { total_kwh: 234.0, total_co2_kg: 191.88, total_bill: 282.0 };
/// let score = impact_score(&totals, 4);
/// assert_eq!(score.rating, ImpactRating::Excellent);
/// assert_eq!(score.co2_per_person_kg, 47.97);
/// ```
pub fn impact_score(totals: &HomeTotals, occupants: u32) -> ImpactScore {
    let occupants = occupants.max(1);
    let per_person = totals.total_co2_kg / f64::from(occupants);
    ImpactScore {
        occupants,
        co2_per_person_kg: per_person,
        annual_co2_per_person_kg: per_person * 12.0,
        rating: ImpactRating::from_co2_per_person(per_person),
    }
}

/// What following every suggestion could save each month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PotentialSavings {
    /// kWh per month
    pub kwh: f64,
    /// kg CO2 per month
    pub co2_kg: f64,
    /// Bill per month
    pub bill: f64,
}

/// Sum the suggestions, each metric limited to 80% of the household total
pub fn potential_savings(suggestions: &[Suggestion], totals: &HomeTotals) -> PotentialSavings {
    let limited = |claimed: f64, total: f64| round1(claimed.min(total * MAX_SAVINGS_SHARE));

    PotentialSavings {
        kwh: limited(
            suggestions.iter().map(|s| s.kwh_saved).sum(),
            totals.total_kwh,
        ),
        co2_kg: limited(
            suggestions.iter().map(|s| s.co2_saved_kg).sum(),
            totals.total_co2_kg,
        ),
        bill: limited(
            suggestions.iter().map(|s| s.bill_saved).sum(),
            totals.total_bill,
        ),
    }
}
