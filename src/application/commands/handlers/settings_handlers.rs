//! Settings Command Handlers

use std::sync::Arc;

use serde_json::Map;

use crate::application::commands::{SetState, UpdateSettings};
use crate::application::error::ApplicationError;
use crate::application::ports::SettingsStorePort;

// ============================================================================
// UpdateSettings
// ============================================================================

/// UpdateSettings Handler
pub struct UpdateSettingsHandler {
    store: Arc<dyn SettingsStorePort>,
}

impl UpdateSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: UpdateSettings) -> Result<(), ApplicationError> {
        let items = command
            .settings
            .to_map()
            .map_err(|e| ApplicationError::StorageError(e.to_string()))?;

        if items.is_empty() {
            return Ok(());
        }

        let keys: Vec<String> = items.keys().cloned().collect();
        self.store.set(items).await?;

        tracing::debug!(keys = ?keys, "Settings updated");
        Ok(())
    }
}

// ============================================================================
// SetState
// ============================================================================

/// SetState Handler
pub struct SetStateHandler {
    store: Arc<dyn SettingsStorePort>,
}

impl SetStateHandler {
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SetState) -> Result<(), ApplicationError> {
        let mut items = Map::new();
        items.insert(command.key.as_str().to_string(), command.value);
        self.store.set(items).await?;

        tracing::debug!(key = %command.key, "Setting stored");
        Ok(())
    }
}
