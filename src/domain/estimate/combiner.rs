//! Simplified Cost Combiner - the grand total shown to the user.
//!
//! Approximates the booth build from a single per-sqm fabrication rate and
//! adds space rental, travel, and the fixed marketing and logistics
//! allowances.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::stall::{non_negative, RateTable, StallDesignSelection};

/// Default marketing allowance.
pub const DEFAULT_MARKETING_COST: f64 = 25000.0;

/// Default logistics allowance.
pub const DEFAULT_LOGISTICS_COST: f64 = 15000.0;

/// Fixed allowances added to every estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostConstants {
    pub marketing_cost: f64,
    pub logistics_cost: f64,
}

impl Default for CostConstants {
    fn default() -> Self {
        Self {
            marketing_cost: DEFAULT_MARKETING_COST,
            logistics_cost: DEFAULT_LOGISTICS_COST,
        }
    }
}

/// Costs that come from outside the stall selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExternalCosts {
    pub space_rate_per_sqm: f64,
    pub flight_cost: f64,
    pub hotel_cost: f64,
}

/// Component totals and their share of the grand total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimplifiedEstimate {
    /// Effective per-sqm booth build rate.
    pub fabrication_rate: f64,
    pub stall_fabrication_cost: f64,
    pub space_cost: f64,
    pub travel_hotel_cost: f64,
    pub marketing_cost: f64,
    pub logistics_cost: f64,
    pub total_cost: f64,
    /// Percent of `total_cost` per component, one decimal.
    pub percentages: BTreeMap<String, f64>,
}

/// Combines the simplified stall cost with external and fixed costs.
#[derive(Debug, Clone, Copy)]
pub struct SimplifiedCostCombiner<'a> {
    rates: &'a RateTable,
    constants: CostConstants,
}

impl<'a> SimplifiedCostCombiner<'a> {
    pub fn new(rates: &'a RateTable, constants: CostConstants) -> Self {
        Self { rates, constants }
    }

    /// Effective per-sqm fabrication rate for a selection.
    ///
    /// Booth-type base plus premiums for wall, flooring, ceiling, and each
    /// selected lighting type.
    pub fn fabrication_rate(&self, selection: &StallDesignSelection) -> f64 {
        let fabrication = &self.rates.fabrication;
        let lighting = selection.lighting_type.len() as f64 * fabrication.per_lighting_type;

        self.rates.fabrication_base(&selection.booth_type)
            + self.rates.fabrication_wall_premium(&selection.wall_type)
            + self.rates.fabrication_flooring_premium(&selection.flooring)
            + self.rates.fabrication_ceiling_premium(&selection.ceiling)
            + lighting
    }

    pub fn combine(
        &self,
        selection: &StallDesignSelection,
        external: ExternalCosts,
    ) -> SimplifiedEstimate {
        let area = selection.area_sqm();
        let fabrication_rate = self.fabrication_rate(selection);

        let stall_fabrication_cost = fabrication_rate * area;
        let space_cost = non_negative(external.space_rate_per_sqm) * area;
        let travel_hotel_cost = non_negative(external.flight_cost) + non_negative(external.hotel_cost);
        let marketing_cost = non_negative(self.constants.marketing_cost);
        let logistics_cost = non_negative(self.constants.logistics_cost);

        let total_cost = (stall_fabrication_cost
            + space_cost
            + travel_hotel_cost
            + marketing_cost
            + logistics_cost)
            .round();

        let components = [
            ("stall_fabrication", stall_fabrication_cost),
            ("space", space_cost),
            ("travel_hotel", travel_hotel_cost),
            ("marketing", marketing_cost),
            ("logistics", logistics_cost),
        ];
        let percentages = components
            .iter()
            .map(|(name, cost)| (name.to_string(), share(*cost, total_cost)))
            .collect();

        SimplifiedEstimate {
            fabrication_rate,
            stall_fabrication_cost,
            space_cost,
            travel_hotel_cost,
            marketing_cost,
            logistics_cost,
            total_cost,
            percentages,
        }
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        (part / total * 1000.0).round() / 10.0
    } else {
        0.0
    }
}
