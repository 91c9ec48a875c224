//! HTTP handlers for stateless estimate endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::extract::ApiJson;
use crate::application::handlers::estimate::CalculateEstimateHandler;
use crate::domain::estimate::FormState;
use crate::domain::stall::StallDesignSelection;

#[derive(Clone)]
pub struct EstimateHandlers {
    calculate_handler: Arc<CalculateEstimateHandler>,
}

impl EstimateHandlers {
    pub fn new(calculate_handler: Arc<CalculateEstimateHandler>) -> Self {
        Self { calculate_handler }
    }
}

/// GET /api/rates - Current rate table
pub async fn get_rates(State(handlers): State<EstimateHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.calculate_handler.rates())).into_response()
}

/// POST /api/estimates - Estimate a complete form state
pub async fn calculate_estimate(
    State(handlers): State<EstimateHandlers>,
    ApiJson(form): ApiJson<FormState>,
) -> Response {
    let estimate = handlers.calculate_handler.handle(&form);
    (StatusCode::OK, Json(estimate)).into_response()
}

/// POST /api/estimates/stall - Detailed breakdown of a stall selection
pub async fn calculate_stall(
    State(handlers): State<EstimateHandlers>,
    ApiJson(selection): ApiJson<StallDesignSelection>,
) -> Response {
    let breakdown = handlers.calculate_handler.stall_breakdown(&selection);
    (StatusCode::OK, Json(breakdown)).into_response()
}
