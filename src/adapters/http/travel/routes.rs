//! HTTP routes for travel endpoints.

use axum::{routing::get, Router};

use super::handlers::{search_flights, search_hotels, TravelHandlers};

pub fn travel_routes(handlers: TravelHandlers) -> Router {
    Router::new()
        .route("/flights", get(search_flights))
        .route("/hotels", get(search_hotels))
        .with_state(handlers)
}
