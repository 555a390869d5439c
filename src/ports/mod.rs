//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentGateway` - Hosted order creation (Razorpay)
//!
//! ## Provisioning Ports
//!
//! - `IdentityProvider` - Password identities (Firebase Authentication)
//! - `DocumentStore` - Keyed documents (Cloud Firestore)

mod document_store;
mod identity_provider;
mod payment_gateway;

pub use document_store::{Document, DocumentStore, DocumentStoreError, FieldValue};
pub use identity_provider::{IdentityError, IdentityProvider};
pub use payment_gateway::{GatewayError, GatewayOrder, PaymentGateway};
