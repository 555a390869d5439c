//! Box Office - ticketing backend services
//!
//! Verifies payment signatures from the Razorpay checkout, proxies order
//! creation to the gateway, serves the static page shell, and provisions the
//! default administrator in Firebase.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
