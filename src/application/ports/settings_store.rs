//! Settings Store Port - 持久化键值存储
//!
//! 设置的唯一持有者。没有锁：同一键上的读后写可能交错，后写者生效

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerializationError(err.to_string())
    }
}

/// Settings Store Port
#[async_trait]
pub trait SettingsStorePort: Send + Sync {
    /// 读取指定键，不存在的键不出现在结果中
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError>;

    /// 合并写入
    async fn set(&self, items: Map<String, Value>) -> Result<(), StoreError>;
}
