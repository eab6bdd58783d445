//! Settings Queries

use crate::domain::settings::SettingKey;

/// 读取设置查询
///
/// keys 为 None 时读取 voiceName / rate / volume
#[derive(Debug, Clone, Default)]
pub struct GetSettings {
    pub keys: Option<Vec<SettingKey>>,
}

impl GetSettings {
    pub fn keys(keys: &[SettingKey]) -> Self {
        Self {
            keys: Some(keys.to_vec()),
        }
    }
}
