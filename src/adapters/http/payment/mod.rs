//! HTTP adapter for payment endpoints.
//!
//! - `POST /verify-payment` - Verify a completed payment's signature
//! - `POST /create-order` - Create an order with the gateway

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{PaymentApiError, PaymentAppState};
pub use routes::{payment_routes, API_PATHS};
