//! Domain layer - value objects and pure rules.
//!
//! - `foundation` - shared primitives
//! - `payment` - signature verification, order requests
//! - `admin` - default administrator identity and profile

pub mod admin;
pub mod foundation;
pub mod payment;
