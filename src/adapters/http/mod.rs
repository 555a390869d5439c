//! HTTP adapters - REST API and page implementations.
//!
//! - `payment` - Signature verification and order creation endpoints
//! - `pages` - Server-rendered views (home, 404, 500, maintenance)
//! - `middleware` - Cross-cutting request handling
//! - `router` - Full application assembly with tower-http layers

pub mod middleware;
pub mod pages;
pub mod payment;
mod router;

pub use payment::{payment_routes, PaymentAppState};
pub use router::{app_router, health};
