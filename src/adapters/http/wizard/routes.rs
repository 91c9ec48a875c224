//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_wizard, delete_wizard, get_wizard, reset_wizard, update_wizard, WizardHandlers,
};

pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(create_wizard))
        .route(
            "/:id",
            get(get_wizard).patch(update_wizard).delete(delete_wizard),
        )
        .route("/:id/reset", post(reset_wizard))
        .with_state(handlers)
}
