//! In-memory document store for testing.
//!
//! # Panics
//!
//! Methods panic if the internal lock is poisoned. Not for production use.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::ports::{Document, DocumentStore, DocumentStoreError};

/// Document store backed by a `HashMap` keyed on `(collection, id)`.
///
/// # Example
///
/// ```ignore
/// let store = InMemoryDocumentStore::new();
/// store.create("users", "uid_1", doc).await?;
/// assert!(store.get("users", "uid_1").is_some());
/// ```
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Document>>,
    create_error: RwLock<Option<DocumentStoreError>>,
    writes: RwLock<usize>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Fail the next `create` call without writing.
    pub fn fail_next_create(&self, error: DocumentStoreError) {
        *self
            .create_error
            .write()
            .expect("InMemoryDocumentStore: error lock poisoned") = Some(error);
    }

    /// Stored document, if any.
    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.documents
            .read()
            .expect("InMemoryDocumentStore: documents lock poisoned")
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .expect("InMemoryDocumentStore: documents lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful `create` calls.
    pub fn write_count(&self) -> usize {
        *self
            .writes
            .read()
            .expect("InMemoryDocumentStore: writes lock poisoned")
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn exists(&self, collection: &str, id: &str) -> Result<bool, DocumentStoreError> {
        Ok(self.get(collection, id).is_some())
    }

    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), DocumentStoreError> {
        if let Some(err) = self
            .create_error
            .write()
            .expect("InMemoryDocumentStore: error lock poisoned")
            .take()
        {
            return Err(err);
        }

        let mut documents = self
            .documents
            .write()
            .expect("InMemoryDocumentStore: documents lock poisoned");
        let key = (collection.to_string(), id.to_string());
        if documents.contains_key(&key) {
            return Err(DocumentStoreError::AlreadyExists);
        }
        documents.insert(key, document);
        *self
            .writes
            .write()
            .expect("InMemoryDocumentStore: writes lock poisoned") += 1;
        Ok(())
    }
}
