//! Identity provider port for account provisioning.
//!
//! Used outside of any request context by the `provision-admin` binary.
//!
//! # Contract
//!
//! Implementations must:
//! - Return `IdentityError::AlreadyExists` when the email is taken, and
//!   nothing else for that case
//! - Carry the provider's own message in `Rejected`
//! - Return `IdentityError::Unavailable` for transport failures

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::admin::{AdminIdentity, IdentityId};

/// Creates and resolves password identities.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new identity.
    ///
    /// # Returns
    ///
    /// * `Ok(IdentityId)` - Identity created
    /// * `Err(IdentityError::AlreadyExists)` - An identity with this email exists
    async fn create_identity(&self, identity: &AdminIdentity) -> Result<IdentityId, IdentityError>;

    /// Resolve the id of an existing identity by its credentials.
    async fn resolve_identity(&self, identity: &AdminIdentity)
        -> Result<IdentityId, IdentityError>;
}

/// Errors from identity provider operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// An identity with this email already exists.
    #[error("Identity already exists")]
    AlreadyExists,

    /// The stored credentials do not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The provider rejected the request.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached.
    #[error("Identity provider unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }

    #[test]
    fn rejected_displays_provider_message_only() {
        let err = IdentityError::Rejected("WEAK_PASSWORD".to_string());
        assert_eq!(err.to_string(), "WEAK_PASSWORD");
    }
}
