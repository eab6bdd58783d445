//! Settings Commands

use serde_json::Value;

use crate::domain::settings::{SettingKey, Settings};

/// 合并写入设置命令
#[derive(Debug, Clone)]
pub struct UpdateSettings {
    pub settings: Settings,
}

/// 写入单个设置项命令
#[derive(Debug, Clone)]
pub struct SetState {
    pub key: SettingKey,
    pub value: Value,
}
