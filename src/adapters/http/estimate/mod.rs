//! HTTP adapter for rate and estimate endpoints.

mod handlers;
mod routes;

pub use handlers::EstimateHandlers;
pub use routes::estimate_routes;
