//! Firebase adapters for admin provisioning.
//!
//! - `FirebaseIdentityProvider` - Firebase Authentication (Identity Toolkit)
//! - `FirestoreDocumentStore` - Cloud Firestore REST
//! - `MockIdentityProvider`, `InMemoryDocumentStore` - Test doubles

mod firestore;
mod identity_toolkit;
mod in_memory_document_store;
mod mock_identity_provider;

pub use firestore::{encode_document, FirestoreConfig, FirestoreDocumentStore};
pub use identity_toolkit::{FirebaseIdentityProvider, IdentityToolkitConfig};
pub use in_memory_document_store::InMemoryDocumentStore;
pub use mock_identity_provider::MockIdentityProvider;
