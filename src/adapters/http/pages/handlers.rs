//! HTTP handlers for the HTML views.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::views::{
    server_error_page_with_detail, HOME_PAGE, MAINTENANCE_PAGE, NOT_FOUND_PAGE, SERVER_ERROR_PAGE,
};

/// GET /
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE.as_str())
}

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    not_found_response()
}

/// GET /error
pub async fn server_error() -> Response {
    server_error_response()
}

/// GET /maintenance
pub async fn maintenance() -> Response {
    maintenance_response()
}

pub fn not_found_response() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE.as_str())).into_response()
}

pub fn server_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(SERVER_ERROR_PAGE.as_str()),
    )
        .into_response()
}

pub fn maintenance_response() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(MAINTENANCE_PAGE.as_str()),
    )
        .into_response()
}

/// Builds the response used when a request handler panics.
///
/// With `verbose` set the panic message is shown on the page.
pub fn panic_responder(
    verbose: bool,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone + Send + Sync + 'static {
    move |panic: Box<dyn Any + Send + 'static>| {
        let detail = panic_message(&*panic);
        tracing::error!(panic = %detail, "Request handler panicked");

        if verbose {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(server_error_page_with_detail(&detail)),
            )
                .into_response()
        } else {
            server_error_response()
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    }
}
