//! Axum router configuration for payment endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_order, verify_payment, PaymentAppState};

/// Create the payment API router.
///
/// # Routes
/// - `POST /verify-payment` - Verify a completed payment's signature
/// - `POST /create-order` - Create an order with the gateway
pub fn payment_routes() -> Router<PaymentAppState> {
    Router::new()
        .route("/verify-payment", post(verify_payment))
        .route("/create-order", post(create_order))
}

/// Paths served as JSON APIs.
pub const API_PATHS: &[&str] = &["/verify-payment", "/create-order"];
