//! HTTP adapter for the server-rendered views.

pub mod handlers;
pub mod routes;
pub mod views;

pub use handlers::{maintenance_response, not_found, panic_responder};
pub use routes::pages_routes;
