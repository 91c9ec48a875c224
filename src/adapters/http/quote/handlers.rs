//! HTTP handlers for quote endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::error::{invalid_id, ErrorResponse};
use crate::application::handlers::quote::{
    GetQuoteHandler, RenderQuoteHandler, SubmitQuoteCommand, SubmitQuoteHandler,
};
use crate::domain::foundation::QuoteId;
use crate::domain::quote::QuoteError;

use super::dto::{QuoteResponse, SubmitQuoteRequest};

#[derive(Clone)]
pub struct QuoteHandlers {
    submit_handler: Arc<SubmitQuoteHandler>,
    get_handler: Arc<GetQuoteHandler>,
    render_handler: Arc<RenderQuoteHandler>,
}

impl QuoteHandlers {
    pub fn new(
        submit_handler: Arc<SubmitQuoteHandler>,
        get_handler: Arc<GetQuoteHandler>,
        render_handler: Arc<RenderQuoteHandler>,
    ) -> Self {
        Self {
            submit_handler,
            get_handler,
            render_handler,
        }
    }
}

/// POST /api/quotes - Submit a quote request
pub async fn submit_quote(
    State(handlers): State<QuoteHandlers>,
    ApiJson(req): ApiJson<SubmitQuoteRequest>,
) -> Response {
    let cmd = SubmitQuoteCommand {
        contact: req.contact(),
        form: req.form,
        notes: req.notes,
        client_total: req.client_total,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(quote) => (StatusCode::CREATED, Json(QuoteResponse::from(&quote))).into_response(),
        Err(e) => handle_quote_error(e),
    }
}

/// GET /api/quotes/:id - Get a submitted quote
pub async fn get_quote(
    State(handlers): State<QuoteHandlers>,
    Path(quote_id): Path<String>,
) -> Response {
    let Ok(quote_id) = quote_id.parse::<QuoteId>() else {
        return invalid_id("quote");
    };

    match handlers.get_handler.handle(quote_id).await {
        Ok(quote) => (StatusCode::OK, Json(QuoteResponse::from(&quote))).into_response(),
        Err(e) => handle_quote_error(e),
    }
}

/// GET /api/quotes/:id/document - Rendered quote document
pub async fn get_quote_document(
    State(handlers): State<QuoteHandlers>,
    Path(quote_id): Path<String>,
) -> Response {
    let Ok(quote_id) = quote_id.parse::<QuoteId>() else {
        return invalid_id("quote");
    };

    match handlers.render_handler.handle(quote_id).await {
        Ok(doc) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, doc.content_type),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", doc.file_name),
                ),
            ],
            doc.body,
        )
            .into_response(),
        Err(e) => handle_quote_error(e),
    }
}

fn handle_quote_error(error: QuoteError) -> Response {
    match error {
        QuoteError::NotFound(id) => {
            ErrorResponse::not_found("Quote", &id.to_string()).with_status(StatusCode::NOT_FOUND)
        }
        QuoteError::ValidationFailed { field, message } => {
            ErrorResponse::validation(&field, message).with_status(StatusCode::BAD_REQUEST)
        }
        QuoteError::RenderFailed(msg) | QuoteError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Quote request failed");
            ErrorResponse::internal(msg).with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
