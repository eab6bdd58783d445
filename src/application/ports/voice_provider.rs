//! Voice Provider Port - 音色目录
//!
//! 音色列表的来源抽象，具体实现在 infrastructure/adapters/voices

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::Voice;

/// Voice Provider 错误
#[derive(Debug, Error)]
pub enum VoiceProviderError {
    #[error("Failed to fetch {url}")]
    Fetch {
        url: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("{0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Voice Provider Port
#[async_trait]
pub trait VoiceProviderPort: Send + Sync {
    /// 获取全部可用音色，顺序即匹配时的先后顺序
    async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError>;

    /// 来源名称（用于日志）
    fn name(&self) -> &str;
}
