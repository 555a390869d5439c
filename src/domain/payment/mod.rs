//! Payment domain - signature verification and order requests.
//!
//! The gateway owns orders and payments; this module only checks that a
//! completed payment's signature is authentic and describes the order request
//! forwarded to the gateway.

mod errors;
mod order;
pub mod signature;

pub use errors::SignatureError;
pub use order::{OrderRequest, DEFAULT_CURRENCY};
pub use signature::{expected_signature, verify, PaymentSignatureVerifier};
