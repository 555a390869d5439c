//! Payment gateway port for hosted order creation.
//!
//! The gateway is the source of truth for orders: this service forwards the
//! request once and relays whatever comes back.
//!
//! # Design
//!
//! - **Verbatim relay**: successful orders and gateway error bodies are passed
//!   through as JSON without reshaping
//! - **Single attempt**: no retry, no backoff
//! - **No local validation**: amount and currency rules belong to the gateway

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::payment::OrderRequest;

/// Order object as returned by the gateway.
pub type GatewayOrder = Value;

/// Port for hosted payment gateway integrations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order with the gateway.
    ///
    /// Returns the gateway's order object unchanged.
    async fn create_order(&self, request: &OrderRequest) -> Result<GatewayOrder, GatewayError>;
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Gateway credentials are not configured on this server.
    #[error("Payment gateway is not configured")]
    NotConfigured,

    /// The gateway answered with a non-success status.
    #[error("Gateway rejected the request with status {status}")]
    Rejected {
        /// HTTP status returned by the gateway.
        status: u16,
        /// The gateway's error body, unmodified.
        body: Value,
    },

    /// The gateway could not be reached.
    #[error("Gateway unreachable: {0}")]
    Unreachable(String),

    /// The gateway answered 2xx with a body that is not JSON.
    #[error("Invalid gateway response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Creates a rejection carrying the gateway's body.
    pub fn rejected(status: u16, body: Value) -> Self {
        GatewayError::Rejected { status, body }
    }

    /// The JSON payload surfaced to the caller.
    ///
    /// Rejections relay the gateway's own body. Local failures use the
    /// gateway's `{"error": {"code", "description"}}` envelope so clients
    /// parse a single shape.
    pub fn payload(&self) -> Value {
        match self {
            GatewayError::Rejected { body, .. } => body.clone(),
            GatewayError::NotConfigured => error_envelope("GATEWAY_NOT_CONFIGURED", &self.to_string()),
            GatewayError::Unreachable(_) => error_envelope("GATEWAY_UNREACHABLE", &self.to_string()),
            GatewayError::InvalidResponse(_) => {
                error_envelope("GATEWAY_INVALID_RESPONSE", &self.to_string())
            }
        }
    }
}

fn error_envelope(code: &str, description: &str) -> Value {
    json!({
        "error": {
            "code": code,
            "description": description,
        }
    })
}
