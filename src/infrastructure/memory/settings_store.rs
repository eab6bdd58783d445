//! In-Memory Settings Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::ports::{SettingsStorePort, StoreError};

/// 内存设置存储
///
/// 进程退出即丢失，用于测试
pub struct InMemorySettingsStore {
    items: DashMap<String, Value>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStorePort for InMemorySettingsStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StoreError> {
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.items
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect())
    }

    async fn set(&self, items: Map<String, Value>) -> Result<(), StoreError> {
        for (key, value) in items {
            self.items.insert(key, value);
        }
        Ok(())
    }
}
