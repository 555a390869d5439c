//! HTTP middleware for axum.
//!
//! - `maintenance` - Maintenance mode short-circuit

pub mod maintenance;

pub use maintenance::{maintenance_middleware, MAINTENANCE_MESSAGE};
