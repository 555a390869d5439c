//! Document store port.
//!
//! A minimal keyed-document contract: existence check and create-only write.
//! No update operation: provisioning never overwrites a profile.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Timestamp;

/// A typed document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Timestamp(Timestamp),
}

/// Document body: field name to value.
pub type Document = BTreeMap<String, FieldValue>;

/// Keyed document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether `collection/id` exists.
    async fn exists(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError>;

    /// Create `collection/id`.
    ///
    /// Fails with `DocumentStoreError::AlreadyExists` instead of overwriting.
    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError>;
}

/// Errors from document store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentStoreError {
    #[error("Document already exists")]
    AlreadyExists,

    #[error("{0}")]
    Rejected(String),

    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}
