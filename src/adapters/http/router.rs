//! Application router - wires every HTTP module with its handlers and the
//! tower-http middleware stack.

use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::HeaderValue;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::estimate::{estimate_routes, EstimateHandlers};
use super::quote::{quote_routes, QuoteHandlers};
use super::travel::{travel_routes, TravelHandlers};
use super::vendor::{vendor_routes, VendorHandlers};
use super::wizard::{wizard_routes, WizardHandlers};
use crate::adapters::document::MarkdownQuoteRenderer;
use crate::adapters::memory::{InMemoryQuoteRepository, InMemoryVendorRepository};
use crate::adapters::travel::StaticTravelCatalog;
use crate::application::{
    CalculateEstimateHandler, GetQuoteHandler, RenderQuoteHandler, SearchTravelHandler,
    SubmitQuoteHandler, WizardSessions,
};
use crate::config::ServerConfig;
use crate::domain::estimate::Estimator;
use crate::domain::foundation::Currency;
use crate::ports::{QuoteRenderer, QuoteRepository, TravelCatalog, VendorRepository};

/// Handler state for every HTTP module.
#[derive(Clone)]
pub struct AppState {
    pub estimate: EstimateHandlers,
    pub wizard: WizardHandlers,
    pub vendor: VendorHandlers,
    pub quote: QuoteHandlers,
    pub travel: TravelHandlers,
}

impl AppState {
    pub fn new(
        estimator: Arc<Estimator>,
        vendors: Arc<dyn VendorRepository>,
        quotes: Arc<dyn QuoteRepository>,
        catalog: Arc<dyn TravelCatalog>,
        renderer: Arc<dyn QuoteRenderer>,
    ) -> Self {
        let sessions = Arc::new(WizardSessions::new(estimator.clone(), vendors.clone()));

        Self {
            estimate: EstimateHandlers::new(Arc::new(CalculateEstimateHandler::new(
                estimator.clone(),
            ))),
            wizard: WizardHandlers::new(sessions),
            vendor: VendorHandlers::new(vendors),
            quote: QuoteHandlers::new(
                Arc::new(SubmitQuoteHandler::new(quotes.clone(), estimator)),
                Arc::new(GetQuoteHandler::new(quotes.clone())),
                Arc::new(RenderQuoteHandler::new(quotes, renderer)),
            ),
            travel: TravelHandlers::new(Arc::new(SearchTravelHandler::new(catalog))),
        }
    }

    /// State backed entirely by in-memory adapters and the static catalog.
    pub fn in_memory(estimator: Arc<Estimator>, currency: Currency) -> Self {
        Self::new(
            estimator,
            Arc::new(InMemoryVendorRepository::new()),
            Arc::new(InMemoryQuoteRepository::new()),
            Arc::new(StaticTravelCatalog::new()),
            Arc::new(MarkdownQuoteRenderer::new(currency)),
        )
    }
}

/// GET /health - Liveness
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Builds the full application router.
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(server))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server.request_timeout()));

    Router::new()
        .route("/health", get(health))
        .merge(estimate_routes(state.estimate))
        .nest("/api/wizards", wizard_routes(state.wizard))
        .nest("/api/vendors", vendor_routes(state.vendor))
        .nest("/api/quotes", quote_routes(state.quote))
        .nest("/api/travel", travel_routes(state.travel))
        .layer(middleware)
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
