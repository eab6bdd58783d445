//! Settings Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 默认语速
pub const DEFAULT_RATE: f64 = 1.0;
/// 默认音量
pub const DEFAULT_VOLUME: f64 = 1.0;

/// 设置项键名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKey {
    #[serde(rename = "voiceName")]
    VoiceName,
    #[serde(rename = "rate")]
    Rate,
    #[serde(rename = "volume")]
    Volume,
    #[serde(rename = "gcpCreds")]
    GcpCreds,
    #[serde(rename = "uniqueClientId")]
    UniqueClientId,
    #[serde(rename = "authToken")]
    AuthToken,
}

impl SettingKey {
    /// 未指定键时读取的默认集合
    pub const DEFAULTS: [SettingKey; 3] = [SettingKey::VoiceName, SettingKey::Rate, SettingKey::Volume];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::VoiceName => "voiceName",
            SettingKey::Rate => "rate",
            SettingKey::Volume => "volume",
            SettingKey::GcpCreds => "gcpCreds",
            SettingKey::UniqueClientId => "uniqueClientId",
            SettingKey::AuthToken => "authToken",
        }
    }

    /// 按存储键名解析，未知键返回 None
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "voiceName" => Some(SettingKey::VoiceName),
            "rate" => Some(SettingKey::Rate),
            "volume" => Some(SettingKey::Volume),
            "gcpCreds" => Some(SettingKey::GcpCreds),
            "uniqueClientId" => Some(SettingKey::UniqueClientId),
            "authToken" => Some(SettingKey::AuthToken),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 设置的部分视图
///
/// 每个字段都可缺省：读取时只包含请求的键，写入时只合并存在的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp_creds: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Settings {
    pub fn rate_or_default(&self) -> f64 {
        self.rate.unwrap_or(DEFAULT_RATE)
    }

    pub fn volume_or_default(&self) -> f64 {
        self.volume.unwrap_or(DEFAULT_VOLUME)
    }

    /// 转换为存储使用的键值表，缺省字段不出现
    pub fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }

    /// 从存储返回的键值表构建，未知键被忽略
    pub fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let known: Map<String, Value> = map
            .into_iter()
            .filter(|(key, value)| SettingKey::parse(key).is_some() && !value.is_null())
            .collect();
        serde_json::from_value(Value::Object(known))
    }

    pub fn is_empty(&self) -> bool {
        *self == Settings::default()
    }
}
