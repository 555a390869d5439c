//! Admin provisioning error types.

use thiserror::Error;

/// Provisioning failures. "Identity already exists" is not one of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionError {
    /// The identity provider refused to create or resolve the identity.
    #[error("Identity provider error: {0}")]
    Identity(String),

    /// The profile document could not be read or written.
    ///
    /// The identity exists at this point; running provisioning again resumes
    /// at the document step.
    #[error("Document store error: {0}")]
    Document(String),
}
