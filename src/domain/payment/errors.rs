//! Payment domain error types.

use thiserror::Error;

/// Errors from payment signature verification.
///
/// A signature mismatch is not an error; it is an `Ok(false)` verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// No signing secret is configured on this server.
    #[error("Payment signing secret is not configured")]
    MissingSecret,
}
