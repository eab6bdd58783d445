//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 本地 API 服务器
    #[serde(default)]
    pub server: ServerConfig,

    /// 后端服务地址
    #[serde(default)]
    pub service: ServiceConfig,

    /// 音色目录
    #[serde(default)]
    pub voices: VoicesConfig,

    /// 登录流程
    #[serde(default)]
    pub auth: AuthConfig,

    /// 设置存储
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 后端服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// 支持服务（远程音色目录等）
    #[serde(default = "default_service_url")]
    pub service_url: String,

    /// Web 应用（登录页面所在站点）
    #[serde(default = "default_web_app_url")]
    pub web_app_url: String,
}

fn default_service_url() -> String {
    "https://support.readaloud.app".to_string()
}

fn default_web_app_url() -> String {
    "https://readaloud.app".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            web_app_url: default_web_app_url(),
        }
    }
}

/// 音色目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct VoicesConfig {
    /// 远程音色目录 URL 或 service_url 下的路径，未设置时只使用内置的 Google Translate 音色
    #[serde(default)]
    pub catalog_url: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_voices_timeout")]
    pub timeout_secs: u64,
}

fn default_voices_timeout() -> u64 {
    30
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            catalog_url: None,
            timeout_secs: default_voices_timeout(),
        }
    }
}

impl VoicesConfig {
    /// 音色目录完整地址，以 `/` 开头的路径相对于 service_url
    pub fn catalog_endpoint(&self, service_url: &str) -> Option<String> {
        let url = self.catalog_url.as_deref()?;
        if url.starts_with('/') {
            Some(format!("{}{}", service_url.trim_end_matches('/'), url))
        } else {
            Some(url.to_string())
        }
    }
}

/// 登录流程配置
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// 本地回调端口
    #[serde(default = "default_callback_port")]
    pub callback_port: u16,

    /// 等待用户完成登录的时间（秒）
    #[serde(default = "default_login_timeout")]
    pub login_timeout_secs: u64,
}

fn default_callback_port() -> u16 {
    5071
}

fn default_login_timeout() -> u64 {
    300
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            callback_port: default_callback_port(),
            login_timeout_secs: default_login_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// sled 数据库目录
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
}

fn default_settings_path() -> String {
    "data/settings.sled".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
