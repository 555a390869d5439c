//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::handlers::{
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentCommand, VerifyPaymentHandler,
    VerifyPaymentResult,
};
use crate::domain::payment::{PaymentSignatureVerifier, SignatureError};
use crate::ports::{GatewayError, PaymentGateway};

use super::dto::{CreateOrderRequest, VerifyPaymentRequest, VerifyPaymentResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for payment endpoints.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub verifier: PaymentSignatureVerifier,
}

impl PaymentAppState {
    pub fn new(gateway: Arc<dyn PaymentGateway>, verifier: PaymentSignatureVerifier) -> Self {
        Self { gateway, verifier }
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.verifier.clone())
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /verify-payment - Check a completed payment's signature
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let Json(request) = payload.map_err(PaymentApiError::MalformedVerification)?;

    let handler = state.verify_payment_handler();
    let result = handler.handle(VerifyPaymentCommand::from(request))?;

    let (status, body) = match result {
        VerifyPaymentResult::Verified => (StatusCode::OK, VerifyPaymentResponse::verified()),
        VerifyPaymentResult::Rejected => (
            StatusCode::BAD_REQUEST,
            VerifyPaymentResponse::failure(VerifyPaymentResponse::INVALID_SIGNATURE),
        ),
    };

    Ok((status, Json(body)))
}

/// POST /create-order - Create an order with the gateway
pub async fn create_order(
    State(state): State<PaymentAppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let Json(request) = payload.map_err(PaymentApiError::MalformedOrder)?;

    let handler = state.create_order_handler();
    let order = handler.handle(CreateOrderCommand::from(request)).await?;

    Ok(Json(order))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error mapped to the payment endpoints' response shapes.
#[derive(Debug)]
pub enum PaymentApiError {
    /// `/verify-payment` body was not valid JSON.
    MalformedVerification(JsonRejection),
    /// `/create-order` body was not valid JSON or lacked required fields.
    MalformedOrder(JsonRejection),
    Signature(SignatureError),
    Gateway(GatewayError),
}

impl From<SignatureError> for PaymentApiError {
    fn from(err: SignatureError) -> Self {
        Self::Signature(err)
    }
}

impl From<GatewayError> for PaymentApiError {
    fn from(err: GatewayError) -> Self {
        Self::Gateway(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        match self {
            PaymentApiError::MalformedVerification(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(VerifyPaymentResponse::failure(rejection.body_text())),
            )
                .into_response(),
            PaymentApiError::MalformedOrder(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": {
                        "code": "BAD_REQUEST_ERROR",
                        "description": rejection.body_text(),
                    }
                })),
            )
                .into_response(),
            PaymentApiError::Signature(SignatureError::MissingSecret) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VerifyPaymentResponse::failure(
                    VerifyPaymentResponse::NOT_CONFIGURED,
                )),
            )
                .into_response(),
            // Gateway failures always surface as 500, whatever the gateway's status.
            PaymentApiError::Gateway(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(err.payload())).into_response()
            }
        }
    }
}
