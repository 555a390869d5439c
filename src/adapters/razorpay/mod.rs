//! Razorpay adapters.
//!
//! - `RazorpayGateway` - Orders API over HTTPS
//! - `MockPaymentGateway` - In-process gateway for tests and local runs

mod mock_gateway;
mod razorpay_gateway;

pub use mock_gateway::MockPaymentGateway;
pub use razorpay_gateway::{RazorpayConfig, RazorpayGateway};
