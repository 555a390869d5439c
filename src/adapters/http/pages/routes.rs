//! Axum router configuration for HTML views.

use axum::{routing::get, Router};

use super::handlers::{home, maintenance, server_error};

/// Create the page router.
///
/// # Routes
/// - `GET /` - Header shell
/// - `GET /error` - Server error view
/// - `GET /maintenance` - Maintenance view
///
/// The 404 view is installed as the application fallback, not here.
pub fn pages_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home))
        .route("/error", get(server_error))
        .route("/maintenance", get(maintenance))
}
