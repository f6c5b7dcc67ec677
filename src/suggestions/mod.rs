//! Energy-saving recommendations
//!
//! Rules keyed off the household inventory and total consumption produce
//! suggestions with kWh, CO2 and bill savings. The list is then sorted by
//! priority, capped so the claimed kWh savings never exceed 80% of actual
//! use, and every bill saving is re-derived from its kWh saving at a flat
//! effective rate.

mod rules;

use crate::calculator::round1;
use crate::inventory::TotalInventory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest share of total consumption the suggestions may claim to save
pub const MAX_SAVINGS_SHARE: f64 = 0.80;

/// Flat price per kWh used to turn saved kWh into saved money
pub const EFFECTIVE_BILL_RATE: f64 = 2.0;

/// Suggestion urgency; sorts High first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act first
    High,
    /// Worth doing
    Medium,
    /// Small wins
    Low,
}

impl Priority {
    /// Upper-case label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Colored marker shown next to the label
    pub fn marker(&self) -> &'static str {
        match self {
            Self::High => "🔴",
            Self::Medium => "🟡",
            Self::Low => "🟢",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One actionable recommendation with its estimated monthly savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Urgency tier
    pub priority: Priority,
    /// Icon shown with the action
    pub icon: String,
    /// What to do
    pub action: String,
    /// Why it helps
    pub reason: String,
    /// Monthly kWh saved
    pub kwh_saved: f64,
    /// Monthly CO2 saved in kg
    pub co2_saved_kg: f64,
    /// Monthly bill saved
    pub bill_saved: f64,
}

impl Suggestion {
    pub(crate) fn new(
        priority: Priority,
        icon: &str,
        action: impl Into<String>,
        reason: impl Into<String>,
        kwh_saved: f64,
        co2_saved_kg: f64,
        bill_saved: f64,
    ) -> Self {
        Self {
            priority,
            icon: icon.to_string(),
            action: action.into(),
            reason: reason.into(),
            kwh_saved: round1(kwh_saved),
            co2_saved_kg: round1(co2_saved_kg),
            bill_saved: round1(bill_saved),
        }
    }
}

/// Generate the prioritized, capped suggestion list
///
/// # Examples
///
/// ```
/// use home_carbon::inventory::TotalInventory;
/// use home_carbon::suggestions::{generate_suggestions, Priority};
///
/// let total: TotalInventory = [("air conditioner".to_string(), 1)].into_iter().collect();
/// let suggestions = generate_suggestions(&total, 360.0);
///
/// assert_eq!(suggestions[0].priority, Priority::High);
/// let claimed: f64 = suggestions.iter().map(|s| s.kwh_saved).sum();
/// assert!(claimed <= 0.80 * 360.0 + 0.5);
/// ```
pub fn generate_suggestions(total: &TotalInventory, total_kwh: f64) -> Vec<Suggestion> {
    let mut suggestions = rules::evaluate(total, total_kwh);

    // stable: rule order is kept within a tier
    suggestions.sort_by_key(|s| s.priority);

    cap_savings(&mut suggestions, total_kwh);

    for suggestion in &mut suggestions {
        suggestion.bill_saved = round1(suggestion.kwh_saved * EFFECTIVE_BILL_RATE);
    }

    suggestions
}

/// Scale kWh and CO2 savings down so their kWh sum fits within the cap
fn cap_savings(suggestions: &mut [Suggestion], total_kwh: f64) {
    let claimed: f64 = suggestions.iter().map(|s| s.kwh_saved).sum();
    let cap = total_kwh * MAX_SAVINGS_SHARE;

    if claimed <= cap || claimed <= 0.0 {
        return;
    }

    let scale = cap / claimed;
    log::debug!(
        "scaling {} suggestions by {:.3} ({} kWh claimed, cap {} kWh)",
        suggestions.len(),
        scale,
        claimed,
        cap
    );
    for suggestion in suggestions {
        suggestion.kwh_saved = round1(suggestion.kwh_saved * scale);
        suggestion.co2_saved_kg = round1(suggestion.co2_saved_kg * scale);
    }
}
