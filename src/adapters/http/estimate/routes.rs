//! HTTP routes for estimate endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{calculate_estimate, calculate_stall, get_rates, EstimateHandlers};

/// Estimate routes carry their full `/api` paths so they can be merged.
pub fn estimate_routes(handlers: EstimateHandlers) -> Router {
    Router::new()
        .route("/api/rates", get(get_rates))
        .route("/api/estimates", post(calculate_estimate))
        .route("/api/estimates/stall", post(calculate_stall))
        .with_state(handlers)
}
