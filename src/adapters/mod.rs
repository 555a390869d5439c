//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `razorpay` - Payment gateway (Razorpay Orders API, mock)
//! - `firebase` - Identity provider and document store (Firebase Auth, Firestore, in-memory)
//! - `http` - Axum router, handlers, and views

pub mod firebase;
pub mod http;
pub mod razorpay;

pub use firebase::{
    FirebaseIdentityProvider, FirestoreDocumentStore, InMemoryDocumentStore, MockIdentityProvider,
};
pub use razorpay::{MockPaymentGateway, RazorpayGateway};
