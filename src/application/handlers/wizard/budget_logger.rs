//! Budget listener that traces every recomputation.

use tracing::debug;

use crate::domain::estimate::{BudgetListener, Estimate, FormState};
use crate::domain::foundation::WizardId;

/// Logs each budget update for one wizard session.
#[derive(Debug, Clone, Copy)]
pub struct LoggingBudgetListener {
    wizard_id: WizardId,
}

impl LoggingBudgetListener {
    pub fn new(wizard_id: WizardId) -> Self {
        Self { wizard_id }
    }
}

impl BudgetListener for LoggingBudgetListener {
    fn on_budget_updated(&self, state: &FormState, estimate: &Estimate) {
        debug!(
            wizard_id = %self.wizard_id,
            area_sqm = state.stall.area_sqm(),
            stall_total = estimate.stall_breakdown.total_cost,
            total_cost = estimate.total_cost,
            "Budget updated"
        );
    }

    fn name(&self) -> &'static str {
        "logging"
    }
}
