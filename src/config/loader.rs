//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "READALOUD";

/// 加载应用配置
///
/// # 环境变量示例
/// - `READALOUD_SERVER__PORT=8080`
/// - `READALOUD_VOICES__CATALOG_URL=https://support.readaloud.app/voices`
/// - `READALOUD_AUTH__LOGIN_TIMEOUT_SECS=120`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5070)?
        .set_default("service.service_url", "https://support.readaloud.app")?
        .set_default("service.web_app_url", "https://readaloud.app")?
        .set_default("voices.timeout_secs", 30)?
        .set_default("auth.callback_port", 5071)?
        .set_default("auth.login_timeout_secs", 300)?
        .set_default("storage.settings_path", "data/settings.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn invalid(message: &str) -> ConfigError {
    ConfigError::ValidationError(message.to_string())
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(invalid("Server port cannot be 0"));
    }

    if config.service.service_url.is_empty() {
        return Err(invalid("Service URL cannot be empty"));
    }

    if config.service.web_app_url.is_empty() {
        return Err(invalid("Web app URL cannot be empty"));
    }

    if matches!(config.voices.catalog_url.as_deref(), Some("")) {
        return Err(invalid("Voice catalog URL cannot be empty when set"));
    }

    if config.voices.timeout_secs == 0 {
        return Err(invalid("Voice catalog timeout cannot be 0"));
    }

    if config.auth.callback_port == 0 {
        return Err(invalid("Auth callback port cannot be 0"));
    }

    if config.auth.callback_port == config.server.port {
        return Err(invalid("Auth callback port must differ from server port"));
    }

    if config.auth.login_timeout_secs == 0 {
        return Err(invalid("Login timeout cannot be 0"));
    }

    if config.storage.settings_path.is_empty() {
        return Err(invalid("Settings path cannot be empty"));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Service URL: {}", config.service.service_url);
    tracing::info!("Web App URL: {}", config.service.web_app_url);
    match &config.voices.catalog_url {
        Some(url) => tracing::info!("Voice Catalog: {} ({}s timeout)", url, config.voices.timeout_secs),
        None => tracing::info!("Voice Catalog: built-in only"),
    }
    tracing::info!("Auth Callback Port: {}", config.auth.callback_port);
    tracing::info!("Login Timeout: {}s", config.auth.login_timeout_secs);
    tracing::info!("Settings Store: {}", config.storage.settings_path);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
