//! HTTP adapter for quote endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{QuoteResponse, SubmitQuoteRequest};
pub use handlers::QuoteHandlers;
pub use routes::quote_routes;
