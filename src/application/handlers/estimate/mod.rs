//! Estimate handlers.

mod calculate_estimate;

pub use calculate_estimate::CalculateEstimateHandler;
