//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::extract::ApiJson;
use crate::adapters::http::error::{invalid_id, ErrorResponse};
use crate::application::handlers::wizard::{WizardError, WizardSessions};
use crate::domain::foundation::WizardId;

use super::dto::{CreateWizardRequest, UpdateWizardRequest, WizardResponse};

#[derive(Clone)]
pub struct WizardHandlers {
    sessions: Arc<WizardSessions>,
}

impl WizardHandlers {
    pub fn new(sessions: Arc<WizardSessions>) -> Self {
        Self { sessions }
    }
}

/// POST /api/wizards - Start a wizard session
pub async fn create_wizard(
    State(handlers): State<WizardHandlers>,
    body: Option<ApiJson<CreateWizardRequest>>,
) -> Response {
    let initial = body.and_then(|ApiJson(req)| req.initial);

    match handlers.sessions.create(initial).await {
        Ok(snapshot) => {
            (StatusCode::CREATED, Json(WizardResponse::from(snapshot))).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizards/:id - Current state and estimate
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let Ok(wizard_id) = wizard_id.parse::<WizardId>() else {
        return invalid_id("wizard");
    };

    match handlers.sessions.get(wizard_id).await {
        Ok(snapshot) => (StatusCode::OK, Json(WizardResponse::from(snapshot))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// PATCH /api/wizards/:id - Apply field changes
pub async fn update_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
    ApiJson(req): ApiJson<UpdateWizardRequest>,
) -> Response {
    let Ok(wizard_id) = wizard_id.parse::<WizardId>() else {
        return invalid_id("wizard");
    };

    match handlers.sessions.apply(wizard_id, req.changes).await {
        Ok(snapshot) => (StatusCode::OK, Json(WizardResponse::from(snapshot))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// POST /api/wizards/:id/reset - Start over with defaults
pub async fn reset_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let Ok(wizard_id) = wizard_id.parse::<WizardId>() else {
        return invalid_id("wizard");
    };

    match handlers.sessions.reset(wizard_id).await {
        Ok(snapshot) => (StatusCode::OK, Json(WizardResponse::from(snapshot))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// DELETE /api/wizards/:id - End a session
pub async fn delete_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let Ok(wizard_id) = wizard_id.parse::<WizardId>() else {
        return invalid_id("wizard");
    };

    match handlers.sessions.remove(wizard_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

fn handle_wizard_error(error: WizardError) -> Response {
    match error {
        WizardError::NotFound(id) => {
            ErrorResponse::not_found("Wizard", &id.to_string()).with_status(StatusCode::NOT_FOUND)
        }
        WizardError::ValidationFailed { field, message } => {
            ErrorResponse::validation(&field, message).with_status(StatusCode::BAD_REQUEST)
        }
        WizardError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Wizard request failed");
            ErrorResponse::internal(msg).with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
