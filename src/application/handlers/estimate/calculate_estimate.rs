//! Stateless estimate queries.

use std::sync::Arc;

use tracing::debug;

use crate::domain::estimate::{Estimate, Estimator, FormState};
use crate::domain::stall::{CostBreakdown, RateTable, StallDesignSelection};

/// Handler for one-shot estimates that keep no server state.
pub struct CalculateEstimateHandler {
    estimator: Arc<Estimator>,
}

impl CalculateEstimateHandler {
    pub fn new(estimator: Arc<Estimator>) -> Self {
        Self { estimator }
    }

    /// Full estimate for a complete form state.
    pub fn handle(&self, form: &FormState) -> Estimate {
        let estimate = self.estimator.estimate(form);
        debug!(
            area_sqm = estimate.stall_breakdown.area_sqm,
            total_cost = estimate.total_cost,
            "Estimate calculated"
        );
        estimate
    }

    /// Detailed breakdown for a stall selection alone.
    pub fn stall_breakdown(&self, selection: &StallDesignSelection) -> CostBreakdown {
        self.estimator.stall_breakdown(&FormState {
            stall: selection.clone(),
            ..Default::default()
        })
    }

    /// The rate table in effect.
    pub fn rates(&self) -> &RateTable {
        self.estimator.rates()
    }
}
