//! Estimator - runs both pricing paths over a complete form state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::combiner::{CostConstants, ExternalCosts, SimplifiedCostCombiner, SimplifiedEstimate};
use super::form_state::FormState;
use crate::domain::stall::{CostBreakdown, RateTable, StallCostAggregator};

/// Result of estimating a form state.
///
/// `total_cost` is the simplified combiner's total and is the only figure
/// presented as the price. `stall_breakdown` is the detailed view of the
/// same booth and is never added to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Estimate {
    pub stall_breakdown: CostBreakdown,
    pub summary: SimplifiedEstimate,
    pub total_cost: f64,
}

/// Shared pricing context: the rate table and fixed allowances.
#[derive(Debug, Clone)]
pub struct Estimator {
    rates: Arc<RateTable>,
    constants: CostConstants,
}

impl Estimator {
    pub fn new(rates: Arc<RateTable>, constants: CostConstants) -> Self {
        Self { rates, constants }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn constants(&self) -> CostConstants {
        self.constants
    }

    /// Detailed breakdown of a stall selection alone.
    pub fn stall_breakdown(&self, state: &FormState) -> CostBreakdown {
        StallCostAggregator::new(&self.rates).calculate(&state.stall)
    }

    /// Full recomputation of both paths.
    pub fn estimate(&self, state: &FormState) -> Estimate {
        let stall_breakdown = self.stall_breakdown(state);

        let external = ExternalCosts {
            space_rate_per_sqm: state.event.space_rate_per_sqm,
            flight_cost: state.flight_cost(),
            hotel_cost: state.hotel_cost(),
        };
        let summary =
            SimplifiedCostCombiner::new(&self.rates, self.constants).combine(&state.stall, external);

        Estimate {
            total_cost: summary.total_cost,
            stall_breakdown,
            summary,
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(Arc::new(RateTable::standard()), CostConstants::default())
    }
}
