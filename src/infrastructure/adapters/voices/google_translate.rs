//! Google Translate 音色来源
//!
//! 每种支持的语言对应一个远程音色，名称形如 "GoogleTranslate English"。
//! 音色列表是固定的，不需要网络请求；合成时才访问 translate 服务。

use async_trait::async_trait;

use crate::application::ports::{VoiceProviderError, VoiceProviderPort};
use crate::domain::voice::{Voice, VoiceEngine};

/// 音色名称前缀
pub const VOICE_NAME_PREFIX: &str = "GoogleTranslate";

/// (语言名, 语言标签)
const LANGUAGES: &[(&str, &str)] = &[
    ("Afrikaans", "af"),
    ("Albanian", "sq"),
    ("Arabic", "ar"),
    ("Bengali", "bn"),
    ("Bosnian", "bs"),
    ("Catalan", "ca"),
    ("Chinese", "zh-CN"),
    ("Chinese (Taiwan)", "zh-TW"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Dutch", "nl"),
    ("English", "en"),
    ("Estonian", "et"),
    ("Filipino", "fil"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("German", "de"),
    ("Greek", "el"),
    ("Gujarati", "gu"),
    ("Hebrew", "he"),
    ("Hindi", "hi"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Indonesian", "id"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Kannada", "kn"),
    ("Khmer", "km"),
    ("Korean", "ko"),
    ("Latvian", "lv"),
    ("Malay", "ms"),
    ("Malayalam", "ml"),
    ("Marathi", "mr"),
    ("Nepali", "ne"),
    ("Norwegian", "no"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Romanian", "ro"),
    ("Russian", "ru"),
    ("Serbian", "sr"),
    ("Sinhala", "si"),
    ("Slovak", "sk"),
    ("Spanish", "es"),
    ("Swahili", "sw"),
    ("Swedish", "sv"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Turkish", "tr"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Vietnamese", "vi"),
];

/// Google Translate Voice Provider
pub struct GoogleTranslateVoiceProvider {
    voices: Vec<Voice>,
}

impl GoogleTranslateVoiceProvider {
    pub fn new() -> Self {
        let voices = LANGUAGES
            .iter()
            .map(|(name, lang)| {
                Voice::remote(
                    format!("{} {}", VOICE_NAME_PREFIX, name),
                    Some(lang),
                    VoiceEngine::GoogleTranslate,
                )
            })
            .collect();

        Self { voices }
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }
}

impl Default for GoogleTranslateVoiceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VoiceProviderPort for GoogleTranslateVoiceProvider {
    async fn get_voices(&self) -> Result<Vec<Voice>, VoiceProviderError> {
        Ok(self.voices.clone())
    }

    fn name(&self) -> &str {
        "google_translate"
    }
}
