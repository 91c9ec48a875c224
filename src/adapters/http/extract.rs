//! Body and query extractors that reject with the shared error body.
//!
//! axum's own `Json` and `Query` reject with plain text; these wrappers keep
//! every 4xx response in the `ErrorResponse` shape.

use async_trait::async_trait;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    response::Response,
    Json,
};
use serde::de::DeserializeOwned;

use super::error::ErrorResponse;

/// JSON request body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// Query string parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    ErrorResponse::bad_request(rejection.body_text()).with_status(rejection.status())
}

fn query_rejection(rejection: QueryRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "Rejected query string");
    ErrorResponse::bad_request(rejection.body_text()).with_status(rejection.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Area {
        area: f64,
    }

    async fn error_code(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        body.code
    }

    #[tokio::test]
    async fn json_body_is_parsed() {
        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"area": 12.5}"#))
            .unwrap();

        let ApiJson(parsed) = ApiJson::<Area>::from_request(request, &()).await.unwrap();
        assert_eq!(parsed.area, 12.5);
    }

    #[tokio::test]
    async fn wrongly_typed_body_gets_error_body() {
        let request = Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(r#"{"area": "twenty"}"#))
            .unwrap();

        let response = ApiJson::<Area>::from_request(request, &()).await.unwrap_err();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error_code(response).await, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_content_type_gets_error_body() {
        let request = Request::builder().body(Body::from(r#"{"area": 1}"#)).unwrap();

        let response = ApiJson::<Area>::from_request(request, &()).await.unwrap_err();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(error_code(response).await, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn bad_query_gets_error_body() {
        let (mut parts, _) = Request::builder()
            .uri("/flights?area=wide")
            .body(())
            .unwrap()
            .into_parts();

        let response = ApiQuery::<Area>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_code(response).await, "BAD_REQUEST");
    }
}
