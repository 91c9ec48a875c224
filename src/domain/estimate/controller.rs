//! Estimate controller - owns the wizard's form state.
//!
//! Every mutation recomputes the whole estimate synchronously and then
//! notifies each registered [`BudgetListener`], in registration order.
//! There is no partial update path and no caching beyond the last result.

use std::sync::Arc;

use super::estimator::{Estimate, Estimator};
use super::form_state::{EventDetails, FlightSelection, FormChange, FormState, HotelSelection};
use crate::domain::foundation::VendorId;
use crate::domain::stall::{AreaUnit, StallDesignSelection};

/// Observer notified after each recomputation.
pub trait BudgetListener: Send + Sync {
    fn on_budget_updated(&self, state: &FormState, estimate: &Estimate);

    /// Listener name for logging.
    fn name(&self) -> &'static str;
}

/// Holds one wizard's form state and its current estimate.
pub struct EstimateController {
    estimator: Estimator,
    state: FormState,
    estimate: Estimate,
    listeners: Vec<Arc<dyn BudgetListener>>,
}

impl EstimateController {
    /// Starts a wizard with default values.
    pub fn new(estimator: Estimator) -> Self {
        Self::with_state(estimator, FormState::default())
    }

    /// Starts a wizard from an existing state.
    pub fn with_state(estimator: Estimator, state: FormState) -> Self {
        let estimate = estimator.estimate(&state);
        Self {
            estimator,
            state,
            estimate,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for subsequent updates.
    pub fn subscribe(&mut self, listener: Arc<dyn BudgetListener>) {
        self.listeners.push(listener);
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn estimate(&self) -> &Estimate {
        &self.estimate
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies one change and recomputes.
    pub fn apply(&mut self, change: FormChange) -> &Estimate {
        change.apply_to(&mut self.state);
        self.recompute()
    }

    /// Applies changes in order, recomputing after each one.
    pub fn apply_all(&mut self, changes: impl IntoIterator<Item = FormChange>) -> &Estimate {
        for change in changes {
            change.apply_to(&mut self.state);
            self.recompute();
        }
        &self.estimate
    }

    /// Edits the stall selection in place and recomputes.
    pub fn update_stall(&mut self, edit: impl FnOnce(&mut StallDesignSelection)) -> &Estimate {
        edit(&mut self.state.stall);
        self.recompute()
    }

    pub fn set_area(&mut self, area: f64, unit: AreaUnit) -> &Estimate {
        self.apply(FormChange::Area { area, unit })
    }

    pub fn set_event_details(&mut self, event: EventDetails) -> &Estimate {
        self.apply(FormChange::Event(event))
    }

    pub fn set_flight(&mut self, flight: FlightSelection) -> &Estimate {
        self.apply(FormChange::Flight(Some(flight)))
    }

    pub fn clear_flight(&mut self) -> &Estimate {
        self.apply(FormChange::Flight(None))
    }

    pub fn set_hotel(&mut self, hotel: HotelSelection) -> &Estimate {
        self.apply(FormChange::Hotel(Some(hotel)))
    }

    pub fn clear_hotel(&mut self) -> &Estimate {
        self.apply(FormChange::Hotel(None))
    }

    pub fn select_vendor(&mut self, vendor_id: VendorId) -> &Estimate {
        self.apply(FormChange::SelectVendor(vendor_id))
    }

    /// Discards all selections and starts over with default values.
    pub fn reset(&mut self) -> &Estimate {
        self.state = FormState::default();
        self.recompute()
    }

    fn recompute(&mut self) -> &Estimate {
        self.estimate = self.estimator.estimate(&self.state);
        for listener in &self.listeners {
            listener.on_budget_updated(&self.state, &self.estimate);
        }
        &self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stall::{BoothPosition, WallType};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingListener {
        totals: Mutex<Vec<f64>>,
    }

    impl RecordingListener {
        fn totals(&self) -> Vec<f64> {
            self.totals.lock().unwrap().clone()
        }
    }

    impl BudgetListener for RecordingListener {
        fn on_budget_updated(&self, _state: &FormState, estimate: &Estimate) {
            self.totals.lock().unwrap().push(estimate.total_cost);
        }

        fn name(&self) -> &'static str {
            "RecordingListener"
        }
    }

    #[test]
    fn starts_with_fixed_allowances_only() {
        let controller = EstimateController::new(Estimator::default());
        assert_eq!(controller.estimate().total_cost, 40000.0);
        assert_eq!(controller.estimate().stall_breakdown.total_cost, 0.0);
    }

    #[test]
    fn each_mutation_recomputes_and_notifies() {
        let listener = Arc::new(RecordingListener::default());
        let mut controller = EstimateController::new(Estimator::default());
        controller.subscribe(listener.clone());

        controller.set_area(20.0, AreaUnit::Sqm);
        controller.update_stall(|stall| stall.wall_type = WallType::Mdf);
        controller.clear_flight();

        let totals = listener.totals();
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0], 160000.0);
        // mdf adds 1500/sqm to the fabrication rate
        assert_eq!(totals[1], 190000.0);
        assert_eq!(totals[2], 190000.0);
    }

    #[test]
    fn detailed_breakdown_tracks_the_same_state() {
        let mut controller = EstimateController::new(Estimator::default());
        controller.set_area(20.0, AreaUnit::Sqm);
        controller.apply(FormChange::BoothPosition(BoothPosition::Island));

        assert_eq!(
            controller.estimate().stall_breakdown.total_cost,
            (179000.0_f64 * 1.25).round()
        );
    }

    #[test]
    fn apply_all_notifies_per_change_and_last_write_wins() {
        let listener = Arc::new(RecordingListener::default());
        let mut controller = EstimateController::new(Estimator::default());
        controller.subscribe(listener.clone());

        controller.apply_all(vec![
            FormChange::WallType(WallType::Mdf),
            FormChange::WallType(WallType::Octonorm),
        ]);

        assert_eq!(listener.totals().len(), 2);
        assert_eq!(controller.state().stall.wall_type, WallType::Octonorm);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut controller = EstimateController::new(Estimator::default());
        controller.set_area(50.0, AreaUnit::Sqm);
        controller.select_vendor(VendorId::new());

        controller.reset();

        assert_eq!(controller.state(), &FormState::default());
        assert_eq!(controller.estimate().total_cost, 40000.0);
    }
}
