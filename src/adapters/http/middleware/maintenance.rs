//! Maintenance mode middleware for axum.
//!
//! While `features.maintenance_mode` is on, every request except the health
//! probe and the maintenance view itself is answered with 503:
//!
//! - JSON API paths get `{"success": false, "message": ...}`
//! - Everything else gets the maintenance page
//!
//! # Example
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/", get(home))
//!     .layer(middleware::from_fn_with_state(flags, maintenance_middleware));
//! ```

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::pages::maintenance_response;
use crate::adapters::http::payment::{VerifyPaymentResponse, API_PATHS};
use crate::config::FeatureFlags;

/// Paths served normally during maintenance.
const ALWAYS_AVAILABLE: &[&str] = &["/health", "/maintenance"];

pub const MAINTENANCE_MESSAGE: &str = "Service is under maintenance. Please try again later.";

/// Short-circuits requests with 503 while maintenance mode is enabled.
pub async fn maintenance_middleware(
    State(flags): State<FeatureFlags>,
    request: Request,
    next: Next,
) -> Response {
    if !flags.maintenance_mode {
        return next.run(request).await;
    }

    let path = request.uri().path();
    if ALWAYS_AVAILABLE.contains(&path) {
        return next.run(request).await;
    }

    tracing::debug!(path, "Request refused during maintenance");

    if API_PATHS.contains(&path) {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(VerifyPaymentResponse::failure(MAINTENANCE_MESSAGE)),
        )
            .into_response()
    } else {
        maintenance_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::{get, post};
    use axum::{middleware, Router};
    use tower::ServiceExt;

    fn app(maintenance_mode: bool) -> Router {
        let flags = FeatureFlags {
            maintenance_mode,
            ..Default::default()
        };
        Router::new()
            .route("/", get(|| async { "home" }))
            .route("/health", get(|| async { "ok" }))
            .route("/create-order", post(|| async { "order" }))
            .layer(middleware::from_fn_with_state(flags, maintenance_middleware))
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            HttpRequest::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn passes_through_when_disabled() {
        assert_eq!(status_of(app(false), "GET", "/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn page_requests_get_503_when_enabled() {
        assert_eq!(
            status_of(app(true), "GET", "/").await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn health_stays_available() {
        assert_eq!(status_of(app(true), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requests_get_json_503() {
        let response = app(true)
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/create-order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
