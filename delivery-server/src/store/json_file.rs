//! JSON file backend
//!
//! 文件格式: `{ "nextId": n, "pedidos": [...] }`，两空格缩进。
//! 写入先落到同目录下的 `.tmp` 文件，再 rename 覆盖目标文件。

use async_trait::async_trait;
use shared::models::OrderCollection;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{RecordStore, StorageError, StorageResult};

/// Unique tmp-file suffix within this process
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Order collection stored in one JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 确保数据文件存在
    ///
    /// Creates the parent directory and seeds an empty collection when the
    /// file is missing. An existing file is left untouched. Returns `true`
    /// when a new file was written.
    pub async fn ensure_initialized(&self) -> StorageResult<bool> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(|source| self.read_error(source))?
        {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        self.save(&OrderCollection::default()).await?;
        tracing::info!(path = %self.path.display(), "Created empty order file");
        Ok(true)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}.tmp", TMP_SEQ.fetch_add(1, Ordering::Relaxed)));
        self.path.with_file_name(name)
    }

    fn read_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> StorageResult<OrderCollection> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.read_error(source))?;
        let collection = serde_json::from_str(&data)?;
        Ok(collection)
    }

    async fn save(&self, collection: &OrderCollection) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(collection)?;
        let tmp_path = self.tmp_path();

        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|source| self.write_error(source))?;

        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(self.write_error(source));
        }

        tracing::debug!(
            path = %self.path.display(),
            orders = collection.orders.len(),
            next_id = collection.next_id,
            "Order file saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Order;
    use tempfile::TempDir;

    fn sample_collection() -> OrderCollection {
        OrderCollection {
            next_id: 2,
            orders: vec![Order {
                id: 1,
                customer: "Ana".to_string(),
                product: "Pizza".to_string(),
                amount: 20.0,
                delivered: false,
                created_at: shared::util::now_utc(),
            }],
        }
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("pedidos.json"));

        let collection = sample_collection();
        store.save(&collection).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, collection);

        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("pedidos.json"));

        store.save(&sample_collection()).await.unwrap();
        store.save(&OrderCollection::default()).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert!(loaded.orders.is_empty());
        assert_eq!(loaded.next_id, 1);
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pedidos.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::new(path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_ensure_initialized_seeds_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("pedidos.json"));

        assert!(store.ensure_initialized().await.unwrap());
        assert_eq!(store.load().await.unwrap(), OrderCollection::default());

        store.save(&sample_collection()).await.unwrap();
        assert!(!store.ensure_initialized().await.unwrap());
        assert_eq!(store.load().await.unwrap().orders.len(), 1);
    }

    #[tokio::test]
    async fn test_file_uses_persisted_labels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pedidos.json");
        let store = JsonFileStore::new(&path);
        store.save(&sample_collection()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["nextId"], 2);
        assert_eq!(raw["pedidos"][0]["cliente"], "Ana");
        assert_eq!(raw["pedidos"][0]["entregue"], false);
    }
}
