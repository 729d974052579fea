//! Data models
//!
//! Shared between delivery-server and API clients.
//! All IDs are `i64`.

pub mod order;

// Re-exports
pub use order::*;
