//! Integration tests for the HTTP API.
//!
//! Drives the fully wired router (in-memory adapters, static travel catalog)
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use exhibit_estimator::adapters::http::{build_router, AppState};
use exhibit_estimator::config::ServerConfig;
use exhibit_estimator::domain::estimate::Estimator;
use exhibit_estimator::domain::foundation::Currency;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app() -> Router {
    let state = AppState::in_memory(Arc::new(Estimator::default()), Currency::Inr);
    build_router(state, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

fn twenty_sqm_form() -> Value {
    json!({
        "event": {"event_name": "India Expo", "city": "Delhi"},
        "stall": {"area": 20.0, "area_unit": "sqm"}
    })
}

async fn create_vendor(app: &Router, name: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/vendors",
        Some(json!({
            "name": name,
            "category": "booth_fabrication",
            "location": "Mumbai",
            "email": "sales@example.com",
            "rating": 4.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Health and rates
// =============================================================================

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(&app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn rates_expose_the_standard_table() {
    let (status, body) = send(&app(), Method::GET, "/api/rates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["wall"]["octonorm"], 8500.0);
}

// =============================================================================
// Estimates
// =============================================================================

#[tokio::test]
async fn estimate_returns_both_paths() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/estimates",
        Some(twenty_sqm_form()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stall_breakdown"]["total_cost"], 179000.0);
    assert_eq!(body["stall_breakdown"]["structural_costs"]["items"]["wall_cost"], 170000.0);
    assert_eq!(body["summary"]["stall_fabrication_cost"], 120000.0);
    assert_eq!(body["total_cost"], 160000.0);
}

#[tokio::test]
async fn stall_breakdown_endpoint_prices_selection_alone() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/estimates/stall",
        Some(json!({"area": 0.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_cost"], 0.0);
    assert!(body["cost_per_sqm"].is_null());
}

#[tokio::test]
async fn malformed_estimate_body_is_rejected() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/estimates",
        Some(json!({"stall": {"area": "twenty"}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn unparseable_query_gets_json_error() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/api/travel/hotels?city=Delhi&nights=many",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Wizard
// =============================================================================

#[tokio::test]
async fn wizard_flow_recomputes_on_each_change() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/wizards", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["estimate"]["total_cost"], 40000.0);
    let id = created["id"].as_str().unwrap().to_string();
    let path = format!("/api/wizards/{}", id);

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &path,
        Some(json!({"changes": [
            {"field": "area", "value": {"area": 20.0, "unit": "sqm"}},
            {"field": "wall_type", "value": "mdf"}
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["state"]["stall"]["wall_type"], "mdf");
    assert_eq!(updated["estimate"]["total_cost"], 190000.0);

    let (status, fetched) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["estimate"], updated["estimate"]);

    let (status, reset) = send(&app, Method::POST, &format!("{}/reset", path), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["estimate"]["total_cost"], 40000.0);

    let (status, _) = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wizard_rejects_unknown_vendor_and_bad_ids() {
    let app = app();
    let (_, created) = send(&app, Method::POST, "/api/wizards", None).await;
    let path = format!("/api/wizards/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PATCH,
        &path,
        Some(json!({"changes": [
            {"field": "select_vendor", "value": "00000000-0000-4000-8000-000000000000"}
        ]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, _) = send(&app, Method::GET, "/api/wizards/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wizard_accepts_active_vendor() {
    let app = app();
    let vendor_id = create_vendor(&app, "Stallcraft").await;
    let (_, created) = send(&app, Method::POST, "/api/wizards", None).await;
    let path = format!("/api/wizards/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        Method::PATCH,
        &path,
        Some(json!({"changes": [{"field": "select_vendor", "value": vendor_id}]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"]["vendor_ids"][0], vendor_id.as_str());
}

// =============================================================================
// Vendors
// =============================================================================

#[tokio::test]
async fn vendor_crud_round_trip() {
    let app = app();
    let id = create_vendor(&app, "Stallcraft").await;
    let path = format!("/api/vendors/{}", id);

    let (status, fetched) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Stallcraft");
    assert_eq!(fetched["active"], true);

    let (status, updated) = send(&app, Method::PATCH, &path, Some(json!({"rating": 3.0}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["rating"], 3.0);
    assert_eq!(updated["name"], "Stallcraft");

    let (status, deactivated) =
        send(&app, Method::POST, &format!("{}/deactivate", path), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deactivated["active"], false);

    let (status, _) = send(&app, Method::DELETE, &path, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn vendor_list_filters_and_paginates() {
    let app = app();
    create_vendor(&app, "Alpha Booths").await;
    create_vendor(&app, "Beta Booths").await;
    let (_, caterer) = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"name": "Chai Co", "category": "catering", "location": "Pune"})),
    )
    .await;
    assert_eq!(caterer["price_range"], "mid_range");

    let (status, page) = send(
        &app,
        Method::GET,
        "/api/vendors?category=booth_fabrication&per_page=1",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 2);
    assert_eq!(page["has_more"], true);
    assert_eq!(page["items"][0]["name"], "Alpha Booths");

    let (_, by_location) = send(&app, Method::GET, "/api/vendors?location=pune", None).await;
    assert_eq!(by_location["total"], 1);
    assert_eq!(by_location["items"][0]["name"], "Chai Co");
}

#[tokio::test]
async fn vendor_validation_errors_are_bad_requests() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"name": "  ", "category": "printing"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "name");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/vendors",
        Some(json!({"name": "Print Hub", "category": "printing", "rating": 7.5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/vendors/xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Quotes
// =============================================================================

#[tokio::test]
async fn quote_submission_recomputes_and_renders() {
    let app = app();

    let (status, quote) = send(
        &app,
        Method::POST,
        "/api/quotes",
        Some(json!({
            "company": "Acme Exhibits",
            "contact_name": "Priya Shah",
            "email": "priya@acme.example",
            "form": twenty_sqm_form(),
            "client_total": 1.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(quote["total_cost"], 160000.0);
    let reference = quote["reference"].as_str().unwrap().to_string();
    assert!(reference.starts_with("QT-"));

    let path = format!("/api/quotes/{}", quote["id"].as_str().unwrap());
    let (status, fetched) = send(&app, Method::GET, &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["reference"], reference.as_str());

    let (status, document) = send_raw(&app, Method::GET, &format!("{}/document", path), None).await;
    assert_eq!(status, StatusCode::OK);
    let markdown = String::from_utf8(document).unwrap();
    assert!(markdown.contains(&reference));
    assert!(markdown.contains("₹1,60,000"));
}

#[tokio::test]
async fn quote_requires_contact_details() {
    let (status, body) = send(
        &app(),
        Method::POST,
        "/api/quotes",
        Some(json!({
            "company": "",
            "contact_name": "Priya Shah",
            "email": "priya@acme.example",
            "form": {}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_quote_is_not_found() {
    let (status, _) = send(
        &app(),
        Method::GET,
        "/api/quotes/00000000-0000-4000-8000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Travel
// =============================================================================

#[tokio::test]
async fn flights_are_sorted_by_price() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/api/travel/flights?origin=Mumbai&destination=Delhi",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let prices: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|offer| offer["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices.len(), 4);
    assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn hotels_for_unknown_city_are_empty() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/api/travel/hotels?city=Atlantis&nights=2",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn hotel_search_validates_nights() {
    let (status, body) = send(
        &app(),
        Method::GET,
        "/api/travel/hotels?city=Delhi&nights=0",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "nights");
}
