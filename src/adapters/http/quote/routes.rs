//! HTTP routes for quote endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_quote, get_quote_document, submit_quote, QuoteHandlers};

pub fn quote_routes(handlers: QuoteHandlers) -> Router {
    Router::new()
        .route("/", post(submit_quote))
        .route("/:id", get(get_quote))
        .route("/:id/document", get(get_quote_document))
        .with_state(handlers)
}
