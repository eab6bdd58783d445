//! Sled-based Settings Store Implementation
//!
//! 每个设置项一条记录: key = "settings:{name}", value = JSON 字节

use async_trait::async_trait;
use serde_json::{Map, Value};
use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{SettingsStorePort, StoreError};

const KEY_PREFIX: &str = "settings:";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/settings.sled".to_string(),
        }
    }
}

/// Sled 设置存储
pub struct SledSettingsStore {
    db: Db,
}

impl SledSettingsStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            entries = db.scan_prefix(KEY_PREFIX).count(),
            "SledSettingsStore initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let config = SledStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    fn storage_key(name: &str) -> String {
        format!("{}{}", KEY_PREFIX, name)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStorePort for SledSettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        let mut result = Map::new();

        for key in keys {
            let stored = self
                .db
                .get(Self::storage_key(key))
                .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

            if let Some(bytes) = stored {
                let value: Value = serde_json::from_slice(&bytes)?;
                result.insert(key.to_string(), value);
            }
        }

        Ok(result)
    }

    async fn set(&self, items: Map<String, Value>) -> Result<(), StoreError> {
        let mut batch = sled::Batch::default();
        for (key, value) in &items {
            batch.insert(Self::storage_key(key).as_bytes(), serde_json::to_vec(value)?);
        }

        self.db
            .apply_batch(batch)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(count = items.len(), "Settings written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_store_set_get() {
        let dir = tempdir().unwrap();
        let store = SledSettingsStore::open(dir.path().join("test.sled")).unwrap();

        let mut items = Map::new();
        items.insert("voiceName".to_string(), json!("Daniel"));
        items.insert("gcpCreds".to_string(), json!({"key": "abc"}));
        store.set(items).await.unwrap();

        let result = store.get(&["voiceName", "gcpCreds", "rate"]).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result["voiceName"], json!("Daniel"));
        assert_eq!(result["gcpCreds"]["key"], json!("abc"));
    }

    #[tokio::test]
    async fn test_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        {
            let store = SledSettingsStore::open(&path).unwrap();
            let mut items = Map::new();
            items.insert("uniqueClientId".to_string(), json!("Ab3dE9xZ"));
            store.set(items).await.unwrap();
            store.flush().unwrap();
        }

        let store = SledSettingsStore::open(&path).unwrap();
        let result = store.get(&["uniqueClientId"]).await.unwrap();
        assert_eq!(result["uniqueClientId"], json!("Ab3dE9xZ"));
    }
}
