//! Slab (tiered) electricity tariff
//!
//! Each consumption range is charged at its own marginal rate: the first
//! 100 units are free, units 101-200 cost 1.50, units 201-500 cost 3.00 and
//! everything above 500 costs 5.00, plus a fixed monthly charge of 30.

use super::round2;
use serde::Serialize;

/// One tariff slab: units up to `upper_bound` are billed at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slab {
    /// Inclusive upper bound in units (kWh); `f64::INFINITY` for the last slab
    pub upper_bound: f64,
    /// Price per unit within this slab
    pub rate: f64,
}

/// Charge accrued within a single slab
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlabCharge {
    /// Lower bound of the slab (exclusive)
    pub from_units: f64,
    /// Upper bound of the slab (inclusive), `None` when unbounded
    pub to_units: Option<f64>,
    /// Units billed in this slab
    pub units: f64,
    /// Rate applied
    pub rate: f64,
    /// `units * rate`
    pub amount: f64,
}

/// Ordered slab schedule plus a fixed monthly charge
///
/// Upper bounds are strictly increasing and the final bound is infinite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffSchedule {
    slabs: &'static [Slab],
    fixed_charge: f64,
}

const STANDARD_SLABS: &[Slab] = &[
    Slab {
        upper_bound: 100.0,
        rate: 0.00,
    },
    Slab {
        upper_bound: 200.0,
        rate: 1.50,
    },
    Slab {
        upper_bound: 500.0,
        rate: 3.00,
    },
    Slab {
        upper_bound: f64::INFINITY,
        rate: 5.00,
    },
];

impl TariffSchedule {
    /// The domestic slab tariff used for every bill
    pub const fn standard() -> Self {
        Self {
            slabs: STANDARD_SLABS,
            fixed_charge: 30.0,
        }
    }

    /// Slabs in ascending order
    pub fn slabs(&self) -> &[Slab] {
        self.slabs
    }

    /// Fixed monthly service charge
    pub fn fixed_charge(&self) -> f64 {
        self.fixed_charge
    }

    /// Per-slab charges for the given consumption
    ///
    /// Only slabs that receive units are listed.
    pub fn breakdown(&self, units: f64) -> Vec<SlabCharge> {
        let mut charges = Vec::new();
        let mut previous_limit = 0.0;

        for slab in self.slabs {
            if units <= previous_limit {
                break;
            }
            let taxable = units.min(slab.upper_bound) - previous_limit;
            charges.push(SlabCharge {
                from_units: previous_limit,
                to_units: slab.upper_bound.is_finite().then_some(slab.upper_bound),
                units: taxable,
                rate: slab.rate,
                amount: taxable * slab.rate,
            });
            previous_limit = slab.upper_bound;
        }

        charges
    }

    /// Monthly bill for the given consumption, rounded to 2 decimals
    pub fn bill(&self, units: f64) -> f64 {
        let energy: f64 = self.breakdown(units).iter().map(|c| c.amount).sum();
        round2(energy + self.fixed_charge)
    }
}

impl Default for TariffSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Monthly bill under the standard tariff
///
/// # Examples
///
/// ```
/// use home_carbon::calculator::tiered_bill;
///
/// // 100 * 0 + 100 * 1.50 + 50 * 3.00 + 30
/// assert_eq!(tiered_bill(250.0), 330.0);
/// assert_eq!(tiered_bill(0.0), 30.0);
/// ```
pub fn tiered_bill(units: f64) -> f64 {
    TariffSchedule::standard().bill(units)
}
