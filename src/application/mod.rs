//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Payment handlers
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentCommand, VerifyPaymentHandler,
    VerifyPaymentResult,
    // Admin handlers
    ProvisionAdminCommand, ProvisionAdminHandler,
};
