//! HTTP handlers for travel search endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::extract::ApiQuery;
use crate::adapters::http::error::domain_error_response;
use crate::application::handlers::travel::SearchTravelHandler;

use super::dto::{FlightQuery, HotelQuery};

#[derive(Clone)]
pub struct TravelHandlers {
    search_handler: Arc<SearchTravelHandler>,
}

impl TravelHandlers {
    pub fn new(search_handler: Arc<SearchTravelHandler>) -> Self {
        Self { search_handler }
    }
}

/// GET /api/travel/flights?origin=&destination=&date=
pub async fn search_flights(
    State(handlers): State<TravelHandlers>,
    ApiQuery(query): ApiQuery<FlightQuery>,
) -> Response {
    match handlers.search_handler.flights(query.into()).await {
        Ok(offers) => (StatusCode::OK, Json(offers)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/travel/hotels?city=&nights=
pub async fn search_hotels(
    State(handlers): State<TravelHandlers>,
    ApiQuery(query): ApiQuery<HotelQuery>,
) -> Response {
    match handlers.search_handler.hotels(query.into()).await {
        Ok(offers) => (StatusCode::OK, Json(offers)).into_response(),
        Err(e) => domain_error_response(e),
    }
}
