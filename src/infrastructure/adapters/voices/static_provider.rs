//! Static Voice Provider - 固定音色列表
//!
//! 用于测试和本地调试，不访问任何外部服务

use async_trait::async_trait;

use crate::application::ports::{VoiceProviderError, VoiceProviderPort};
use crate::domain::voice::Voice;

/// Static Voice Provider
pub struct StaticVoiceProvider {
    voices: Vec<Voice>,
}

impl StaticVoiceProvider {
    pub fn new(voices: Vec<Voice>) -> Self {
        Self { voices }
    }
}

#[async_trait]
impl VoiceProviderPort for StaticVoiceProvider {
    async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError> {
        Ok(self.voices.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
