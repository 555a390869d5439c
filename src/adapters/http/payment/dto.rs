//! Data Transfer Objects for payment endpoints.
//!
//! Field names match what the gateway's checkout widget posts back, so the
//! browser can forward the callback payload unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::handlers::{CreateOrderCommand, VerifyPaymentCommand};
use crate::domain::payment::{OrderRequest, DEFAULT_CURRENCY};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /verify-payment`.
///
/// Missing fields read as empty strings and fail verification.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

impl From<VerifyPaymentRequest> for VerifyPaymentCommand {
    fn from(req: VerifyPaymentRequest) -> Self {
        VerifyPaymentCommand {
            order_id: req.razorpay_order_id,
            payment_id: req.razorpay_payment_id,
            signature: req.razorpay_signature,
        }
    }
}

/// Request body for `POST /create-order`.
///
/// Only `amount` must be present and integral; the rest is the gateway's call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in minor units.
    pub amount: i64,

    /// Defaults to INR.
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub receipt: Option<String>,

    #[serde(default)]
    pub notes: Option<BTreeMap<String, Value>>,
}

impl From<CreateOrderRequest> for CreateOrderCommand {
    fn from(req: CreateOrderRequest) -> Self {
        CreateOrderCommand {
            request: OrderRequest {
                amount: req.amount,
                currency: req
                    .currency
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                receipt: req.receipt,
                notes: req.notes.unwrap_or_default(),
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for `POST /verify-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
}

impl VerifyPaymentResponse {
    pub const VERIFIED: &'static str = "Payment verified successfully";
    pub const INVALID_SIGNATURE: &'static str = "Invalid payment signature";
    pub const NOT_CONFIGURED: &'static str = "Payment verification is not configured";

    pub fn verified() -> Self {
        Self {
            success: true,
            message: Self::VERIFIED.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_request_defaults_missing_fields_to_empty() {
        let req: VerifyPaymentRequest =
            serde_json::from_str(r#"{"razorpay_order_id":"order_1"}"#).unwrap();

        let cmd = VerifyPaymentCommand::from(req);

        assert_eq!(cmd.order_id, "order_1");
        assert_eq!(cmd.payment_id, "");
        assert_eq!(cmd.signature, "");
    }

    #[test]
    fn create_order_request_defaults_currency_and_notes() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"amount":50000,"receipt":"rcpt_1"}"#).unwrap();

        let cmd = CreateOrderCommand::from(req);

        assert_eq!(cmd.request.currency, "INR");
        assert!(cmd.request.notes.is_empty());
    }

    #[test]
    fn create_order_request_null_currency_uses_default() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"amount":100,"currency":null,"receipt":"r","notes":{"k":"v"}}"#,
        )
        .unwrap();

        let cmd = CreateOrderCommand::from(req);

        assert_eq!(cmd.request.currency, "INR");
        assert_eq!(cmd.request.notes.get("k"), Some(&Value::from("v")));
    }

    #[test]
    fn create_order_request_keeps_explicit_currency() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"amount":100,"currency":"USD","receipt":"r"}"#).unwrap();

        assert_eq!(CreateOrderCommand::from(req).request.currency, "USD");
    }

    #[test]
    fn create_order_request_leaves_receipt_and_note_values_to_the_gateway() {
        let req: CreateOrderRequest =
            serde_json::from_str(r#"{"amount":100,"notes":{"seats":4,"vip":true}}"#).unwrap();

        let cmd = CreateOrderCommand::from(req);

        assert_eq!(cmd.request.receipt, None);
        assert_eq!(cmd.request.notes.get("seats"), Some(&Value::from(4)));
        assert_eq!(cmd.request.notes.get("vip"), Some(&Value::Bool(true)));
    }

    #[test]
    fn create_order_request_requires_integer_amount() {
        let result =
            serde_json::from_str::<CreateOrderRequest>(r#"{"amount":"100","receipt":"r"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn verify_response_serializes_flat() {
        let json = serde_json::to_value(VerifyPaymentResponse::verified()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "Payment verified successfully" })
        );
    }
}
