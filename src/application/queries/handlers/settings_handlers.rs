//! Settings Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::SettingsStorePort;
use crate::application::queries::GetSettings;
use crate::domain::settings::{SettingKey, Settings};

/// GetSettings Handler
pub struct GetSettingsHandler {
    store: Arc<dyn SettingsStorePort>,
}

impl GetSettingsHandler {
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSettings) -> Result<Settings, ApplicationError> {
        let keys: Vec<&str> = match &query.keys {
            Some(keys) => keys.iter().map(SettingKey::as_str).collect(),
            None => SettingKey::DEFAULTS.iter().map(SettingKey::as_str).collect(),
        };

        let items = self.store.get(&keys).await?;
        Settings::from_map(items).map_err(|e| ApplicationError::StorageError(e.to_string()))
    }
}
