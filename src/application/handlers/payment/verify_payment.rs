//! VerifyPaymentHandler - Command handler for checking a completed payment's signature.

use crate::domain::payment::{PaymentSignatureVerifier, SignatureError};

/// Command carrying the gateway's checkout callback fields.
#[derive(Debug, Clone, Default)]
pub struct VerifyPaymentCommand {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Outcome of a verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyPaymentResult {
    Verified,
    Rejected,
}

impl VerifyPaymentResult {
    pub fn is_verified(self) -> bool {
        matches!(self, VerifyPaymentResult::Verified)
    }
}

/// Handler for payment signature verification.
///
/// Holds no state beyond the verifier; every call is independent.
#[derive(Clone)]
pub struct VerifyPaymentHandler {
    verifier: PaymentSignatureVerifier,
}

impl VerifyPaymentHandler {
    pub fn new(verifier: PaymentSignatureVerifier) -> Self {
        Self { verifier }
    }

    pub fn handle(&self, cmd: VerifyPaymentCommand) -> Result<VerifyPaymentResult, SignatureError> {
        let valid = self
            .verifier
            .verify(&cmd.order_id, &cmd.payment_id, &cmd.signature)
            .map_err(|e| {
                tracing::error!("Payment verification attempted without a signing secret");
                e
            })?;

        if valid {
            tracing::info!(
                order_id = %cmd.order_id,
                payment_id = %cmd.payment_id,
                "Payment signature verified"
            );
            Ok(VerifyPaymentResult::Verified)
        } else {
            tracing::warn!(
                order_id = %cmd.order_id,
                payment_id = %cmd.payment_id,
                "Payment signature mismatch"
            );
            Ok(VerifyPaymentResult::Rejected)
        }
    }
}
