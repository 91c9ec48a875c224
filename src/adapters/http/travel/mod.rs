//! HTTP adapter for travel search endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{FlightQuery, HotelQuery};
pub use handlers::TravelHandlers;
pub use routes::travel_routes;
