//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod admin;
pub mod payment;

pub use admin::{profile_document, ProvisionAdminCommand, ProvisionAdminHandler};
pub use payment::{
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentCommand, VerifyPaymentHandler,
    VerifyPaymentResult,
};
