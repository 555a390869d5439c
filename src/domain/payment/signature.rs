//! Razorpay payment signature verification.
//!
//! After checkout the gateway hands the browser an order id, a payment id and
//! a signature. The signature is the lowercase hex HMAC-SHA256 of
//! `"{order_id}|{payment_id}"` keyed by the account's key secret. Recomputing
//! it server-side proves the three values came from the gateway.
//!
//! Everything here is pure: no logging, no I/O, no shared state.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::SignatureError;

type HmacSha256 = Hmac<Sha256>;

/// Separator between order id and payment id in the signed message.
const MESSAGE_SEPARATOR: char = '|';

/// Computes the signature the gateway would issue for this order and payment.
///
/// Identifiers are used as-is, including empty strings.
///
/// # Errors
///
/// Returns `SignatureError::MissingSecret` if `secret` is empty.
pub fn expected_signature(
    order_id: &str,
    payment_id: &str,
    secret: &str,
) -> Result<String, SignatureError> {
    if secret.is_empty() {
        return Err(SignatureError::MissingSecret);
    }

    let message = format!("{}{}{}", order_id, MESSAGE_SEPARATOR, payment_id);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(message.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verifies a payment signature against the shared secret.
///
/// Returns `Ok(true)` only when `signature` equals the expected lowercase hex
/// digest exactly: same length, same case.
///
/// # Errors
///
/// Returns `SignatureError::MissingSecret` if `secret` is empty. This is a
/// server configuration fault, never an authentication verdict.
pub fn verify(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> Result<bool, SignatureError> {
    let expected = expected_signature(order_id, payment_id, secret)?;
    Ok(constant_time_compare(
        expected.as_bytes(),
        signature.as_bytes(),
    ))
}

/// Performs constant-time comparison of two byte slices.
///
/// Only the length check short-circuits; the digest length is public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Verifier bound to the server's configured key secret.
///
/// Built once at startup and shared by request handlers. A verifier built
/// without a secret answers every request with `MissingSecret`.
#[derive(Clone)]
pub struct PaymentSignatureVerifier {
    secret: Option<SecretString>,
}

impl PaymentSignatureVerifier {
    /// Creates a verifier with the given key secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self::from_secret(Some(SecretString::new(secret.into())))
    }

    /// Creates a verifier from an optional configured secret.
    pub fn from_secret(secret: Option<SecretString>) -> Self {
        Self { secret }
    }

    /// Creates a verifier with no secret configured.
    pub fn unconfigured() -> Self {
        Self { secret: None }
    }

    /// Whether a non-empty secret is available.
    pub fn is_configured(&self) -> bool {
        self.secret
            .as_ref()
            .is_some_and(|s| !s.expose_secret().is_empty())
    }

    /// Verifies the signature for the given order and payment.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::MissingSecret` if no secret is configured.
    pub fn verify(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<bool, SignatureError> {
        let secret = self
            .secret
            .as_ref()
            .ok_or(SignatureError::MissingSecret)?;
        verify(order_id, payment_id, signature, secret.expose_secret())
    }
}

impl std::fmt::Debug for PaymentSignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentSignatureVerifier")
            .field("configured", &self.is_configured())
            .finish()
    }
}
