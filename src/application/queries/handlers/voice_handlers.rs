//! Voice Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::VoiceProviderPort;
use crate::application::queries::{GetSpeechVoice, ListVoices};
use crate::domain::voice::{find_voice_by_lang, find_voice_by_name, Voice};

// ============================================================================
// GetSpeechVoice
// ============================================================================

/// GetSpeechVoice Handler
///
/// 解析顺序:
/// 1. 名称精确匹配，原样返回
/// 2. 按语言匹配：本地音色 -> Google Translate 音色 -> 全部音色
/// 3. 语言匹配到的远程音色返回带 auto_select 的副本
pub struct GetSpeechVoiceHandler {
    voice_provider: Arc<dyn VoiceProviderPort>,
}

impl GetSpeechVoiceHandler {
    pub fn new(voice_provider: Arc<dyn VoiceProviderPort>) -> Self {
        Self { voice_provider }
    }

    pub async fn handle(&self, query: GetSpeechVoice) -> Result<Option<Voice>, ApplicationError> {
        let voices = self.voice_provider.get_voices().await?;

        // 空串等同于未指定
        if let Some(name) = query.voice_name.as_deref().filter(|n| !n.is_empty()) {
            if let Some(voice) = find_voice_by_name(&voices, name) {
                tracing::debug!(voice_name = %voice.voice_name, "Voice resolved by name");
                return Ok(Some(voice.clone()));
            }
        }

        let Some(lang) = query.lang.as_deref().filter(|l| !l.is_empty()) else {
            return Ok(None);
        };

        let voice = find_voice_by_lang(voices.iter().filter(|v| !v.is_remote()), lang)
            .or_else(|| find_voice_by_lang(voices.iter().filter(|v| v.is_google_translate()), lang))
            .or_else(|| find_voice_by_lang(&voices, lang))
            .map(|voice| {
                if voice.is_remote() {
                    voice.auto_selected()
                } else {
                    voice.clone()
                }
            });

        match &voice {
            Some(v) => tracing::debug!(
                lang = %lang,
                voice_name = %v.voice_name,
                auto_select = v.auto_select,
                "Voice resolved by language"
            ),
            None => tracing::debug!(lang = %lang, "No voice matches language"),
        }

        Ok(voice)
    }
}

// ============================================================================
// ListVoices
// ============================================================================

/// ListVoices Handler
pub struct ListVoicesHandler {
    voice_provider: Arc<dyn VoiceProviderPort>,
}

impl ListVoicesHandler {
    pub fn new(voice_provider: Arc<dyn VoiceProviderPort>) -> Self {
        Self { voice_provider }
    }

    pub async fn handle(&self, _query: ListVoices) -> Result<Vec<Voice>, ApplicationError> {
        Ok(self.voice_provider.get_voices().await?)
    }
}
