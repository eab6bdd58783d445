//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::settings::SettingKey;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveVoiceRequest {
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

// ============================================================================
// Settings DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GetSettingsRequest {
    /// 缺省时读取 voiceName / rate / volume
    #[serde(default)]
    pub keys: Option<Vec<SettingKey>>,
}

#[derive(Debug, Deserialize)]
pub struct SetStateRequest {
    pub key: SettingKey,
    pub value: Value,
}

// ============================================================================
// Identity DTOs
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdResponse {
    pub client_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthTokenRequest {
    #[serde(default)]
    pub interactive: bool,
}

#[derive(Debug, Serialize)]
pub struct AuthTokenResponse {
    pub token: Option<String>,
}
