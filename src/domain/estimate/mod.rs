//! Estimate module - form state, the simplified combiner, and the controller.
//!
//! # Components
//!
//! - `FormState` / `FormChange` - Wizard state and its single-field mutations
//! - `SimplifiedCostCombiner` - Fabrication rate, space, travel, and allowances
//! - `Estimator` - Runs the detailed and simplified paths together
//! - `EstimateController` - Owns a form state, recomputes on every change,
//!   notifies `BudgetListener`s

mod combiner;
mod controller;
mod estimator;
mod form_state;

pub use combiner::{
    CostConstants, ExternalCosts, SimplifiedCostCombiner, SimplifiedEstimate,
    DEFAULT_LOGISTICS_COST, DEFAULT_MARKETING_COST,
};
pub use controller::{BudgetListener, EstimateController};
pub use estimator::{Estimate, Estimator};
pub use form_state::{EventDetails, FlightSelection, FormChange, FormState, HotelSelection};
