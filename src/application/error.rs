//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。所有错误都直接返回给调用方，不做重试

use thiserror::Error;

use crate::application::ports::{IdentityError, StoreError, VoiceProviderError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 前置条件不满足
    #[error("{0}")]
    AssertionFailed(String),

    /// HTTP 非 200 响应或传输失败
    #[error("Failed to fetch {url}")]
    FetchFailed {
        url: String,
        status: Option<u16>,
        detail: String,
    },

    /// 超时
    #[error("{0}")]
    TimeoutExceeded(String),

    /// 登录流程返回错误
    #[error("{0}")]
    AuthFlowError(String),

    /// 参数格式错误
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 设置存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 音色来源错误
    #[error("Voice provider error: {0}")]
    VoiceProviderError(String),
}

/// URL 在错误信息中最多保留的字符数
const MAX_URL_CHARS: usize = 100;

impl ApplicationError {
    /// 创建 FetchFailed 错误，URL 截断到 100 个字符
    pub fn fetch_failed(url: &str, status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::FetchFailed {
            url: url.chars().take(MAX_URL_CHARS).collect(),
            status,
            detail: detail.into(),
        }
    }

    /// 创建超时错误
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::TimeoutExceeded(message.into())
    }

    /// 创建参数错误
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// 创建登录流程错误
    pub fn auth_flow(message: impl Into<String>) -> Self {
        Self::AuthFlowError(message.into())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<VoiceProviderError> for ApplicationError {
    fn from(err: VoiceProviderError) -> Self {
        match err {
            VoiceProviderError::Fetch { url, status, detail } => Self::FetchFailed { url, status, detail },
            VoiceProviderError::Timeout(message) => Self::TimeoutExceeded(message),
            other => Self::VoiceProviderError(other.to_string()),
        }
    }
}

/// 基于 HTTP 的音色来源复用应用层的请求错误
impl From<ApplicationError> for VoiceProviderError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::FetchFailed { url, status, detail } => Self::Fetch { url, status, detail },
            ApplicationError::TimeoutExceeded(msg) => Self::Timeout(msg),
            other => Self::InvalidResponse(other.to_string()),
        }
    }
}

impl From<IdentityError> for ApplicationError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Timeout(message) => Self::TimeoutExceeded(message),
            IdentityError::LaunchFailed(message) => Self::AuthFlowError(message),
            other => Self::AuthFlowError(other.to_string()),
        }
    }
}

/// 断言，失败时返回 AssertionFailed
pub fn assert_that(truthy: bool, message: Option<&str>) -> Result<(), ApplicationError> {
    if truthy {
        Ok(())
    } else {
        Err(ApplicationError::AssertionFailed(
            message.unwrap_or("Assertion failed").to_string(),
        ))
    }
}
