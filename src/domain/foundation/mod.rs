//! Foundation module - Shared domain primitives.

mod timestamp;

pub use timestamp::Timestamp;
