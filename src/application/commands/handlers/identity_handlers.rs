//! Identity Command Handlers

use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{Map, Value};

use crate::application::commands::{GetAuthToken, GetUniqueClientId};
use crate::application::error::ApplicationError;
use crate::application::ports::{IdentityPort, SettingsStorePort};
use crate::domain::settings::SettingKey;
use crate::util::parse_url_query;

/// 客户端 ID 长度
pub const CLIENT_ID_LEN: usize = 8;

/// 读取单个字符串设置
async fn read_string(
    store: &dyn SettingsStorePort,
    key: SettingKey,
) -> Result<Option<String>, ApplicationError> {
    let items = store.get(&[key.as_str()]).await?;
    Ok(items
        .get(key.as_str())
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}

async fn write_string(
    store: &dyn SettingsStorePort,
    key: SettingKey,
    value: &str,
) -> Result<(), ApplicationError> {
    let mut items = Map::new();
    items.insert(key.as_str().to_string(), Value::String(value.to_string()));
    store.set(items).await?;
    Ok(())
}

// ============================================================================
// GetUniqueClientId
// ============================================================================

/// GetUniqueClientId Handler
///
/// 只生成一次，之后一直返回已保存的值
pub struct GetUniqueClientIdHandler {
    store: Arc<dyn SettingsStorePort>,
}

impl GetUniqueClientIdHandler {
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _command: GetUniqueClientId) -> Result<String, ApplicationError> {
        if let Some(id) = read_string(self.store.as_ref(), SettingKey::UniqueClientId).await? {
            return Ok(id);
        }

        let id = generate_client_id(CLIENT_ID_LEN);
        write_string(self.store.as_ref(), SettingKey::UniqueClientId, &id).await?;

        tracing::info!(client_id = %id, "Unique client id generated");
        Ok(id)
    }
}

/// 生成字母数字随机 ID（非密码学用途）
pub fn generate_client_id(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

// ============================================================================
// GetAuthToken
// ============================================================================

/// GetAuthToken Handler
///
/// 已保存 token 直接返回；否则在 interactive 时启动登录流程，
/// 从重定向 URL 的 query string 中取 token 或 error
pub struct GetAuthTokenHandler {
    store: Arc<dyn SettingsStorePort>,
    identity: Arc<dyn IdentityPort>,
    web_app_url: String,
}

impl GetAuthTokenHandler {
    pub fn new(
        store: Arc<dyn SettingsStorePort>,
        identity: Arc<dyn IdentityPort>,
        web_app_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            identity,
            web_app_url: web_app_url.into(),
        }
    }

    /// 登录页地址
    pub fn login_url(&self) -> String {
        format!(
            "{}/login.html?returnUrl={}",
            self.web_app_url.trim_end_matches('/'),
            self.identity.redirect_url()
        )
    }

    pub async fn handle(&self, command: GetAuthToken) -> Result<Option<String>, ApplicationError> {
        if let Some(token) = read_string(self.store.as_ref(), SettingKey::AuthToken).await? {
            return Ok(Some(token));
        }

        if !command.interactive {
            return Ok(None);
        }

        let token = self.interactive_login().await?;
        if let Some(token) = &token {
            write_string(self.store.as_ref(), SettingKey::AuthToken, token).await?;
            tracing::info!("Auth token obtained and saved");
        }

        Ok(token)
    }

    async fn interactive_login(&self) -> Result<Option<String>, ApplicationError> {
        let login_url = self.login_url();
        tracing::debug!(url = %login_url, "Launching web auth flow");

        let Some(response_url) = self.identity.launch_web_auth_flow(&login_url, true).await? else {
            return Ok(None);
        };

        let mut query = parse_url_query(&response_url)?;
        let error_description = query.remove("error_description").flatten();
        if let Some(error) = query.remove("error").flatten().filter(|e| !e.is_empty()) {
            let message = error_description.filter(|d| !d.is_empty()).unwrap_or(error);
            return Err(ApplicationError::auth_flow(message));
        }

        Ok(query.remove("token").flatten().filter(|t| !t.is_empty()))
    }
}
