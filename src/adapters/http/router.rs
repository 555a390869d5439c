//! Application router assembly.
//!
//! Layer order, outermost first:
//!
//! ```text
//! SetRequestId → Trace (if enabled) → PropagateRequestId → CatchPanic
//!   → CORS → Compression → Maintenance → routes / 404 fallback
//! ```
//!
//! `TimeoutLayer` wraps only `/health` and the page routes. Payment routes are
//! bounded by the gateway client's own timeout, so a slow gateway surfaces as
//! a `GATEWAY_UNREACHABLE` error object rather than an empty 408.

use axum::body::Body;
use axum::routing::get;
use axum::{middleware, Json, Router};
use http::{header, HeaderValue, Method, Request};
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::middleware::maintenance_middleware;
use super::pages::{not_found, pages_routes, panic_responder};
use super::payment::{payment_routes, PaymentAppState};
use crate::config::{AppConfig, ServerConfig};

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Build the complete application router.
pub fn app_router(state: PaymentAppState, config: &AppConfig) -> Router {
    let pages: Router<PaymentAppState> = Router::new()
        .route("/health", get(health))
        .merge(pages_routes())
        .layer(TimeoutLayer::new(config.server.request_timeout()));

    let router = Router::new()
        .merge(pages)
        .merge(payment_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            config.features.clone(),
            maintenance_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(cors_layer(&config.server))
        .layer(CatchPanicLayer::custom(panic_responder(
            config.features.verbose_errors,
        )))
        .layer(PropagateRequestIdLayer::x_request_id());

    let router = if config.features.enable_tracing {
        router.layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }),
        )
    } else {
        router
    };

    router.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// CORS for the browser client.
///
/// With no configured origins any origin is allowed; otherwise only the
/// listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
