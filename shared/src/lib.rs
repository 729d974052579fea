//! Shared types for the delivery service
//!
//! Order data model (persisted and wire format) and small utilities used by
//! the server and its clients.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
