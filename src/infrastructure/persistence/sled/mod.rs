//! Sled 持久化

mod settings_store;

pub use settings_store::{SledSettingsStore, SledStoreConfig};
