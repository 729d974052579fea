//! Record store for the order collection
//!
//! The whole [`OrderCollection`] (orders + `nextId` counter) is read at the
//! start of every operation and, for mutations, written back in full.
//!
//! | Backend | Medium | Used by |
//! |---------|--------|---------|
//! | [`JsonFileStore`] | single UTF-8 JSON file | server |
//! | [`MemoryStore`] | serialized copy in process memory | tests, embedding |
//!
//! # Concurrency
//!
//! Nothing serializes a `load` → `save` cycle. Two requests that interleave
//! between their `load` and `save` will lose one of the updates; this is the
//! accepted behavior of the service.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::models::OrderCollection;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors (the medium is unreadable, unwritable or unparsable)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable medium holding the order collection
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full collection
    async fn load(&self) -> StorageResult<OrderCollection>;

    /// Overwrite the full collection (never appends or merges)
    async fn save(&self, collection: &OrderCollection) -> StorageResult<()>;
}
