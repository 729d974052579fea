//! In-memory backend

use async_trait::async_trait;
use shared::models::OrderCollection;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

use super::{RecordStore, StorageError, StorageResult};

/// Order collection kept in process memory
///
/// Each `load` hands out an independent copy, so callers get the same
/// read-modify-write behavior as with the file backend. The medium can be
/// switched offline to exercise storage failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collection: Arc<Mutex<OrderCollection>>,
    offline: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(collection: OrderCollection) -> Self {
        Self {
            collection: Arc::new(Mutex::new(collection)),
            offline: Arc::default(),
        }
    }

    /// Make every subsequent load/save fail (or succeed again)
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> StorageResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Read {
                path: PathBuf::from(":memory:"),
                source: std::io::Error::other("memory store offline"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> StorageResult<OrderCollection> {
        self.check_online()?;
        Ok(self.collection.lock().await.clone())
    }

    async fn save(&self, collection: &OrderCollection) -> StorageResult<()> {
        self.check_online()?;
        *self.collection.lock().await = collection.clone();
        Ok(())
    }
}
