//! Voice Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{parse_lang, Gender, LanguageTag, VoiceEngine};

/// 合成音色
///
/// 由音色来源提供，核心逻辑只读。
/// `auto_select` 例外：由解析器在语言回退选中远程音色时设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub voice_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub engine: VoiceEngine,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_select: bool,
}

impl Voice {
    /// 创建本地音色
    pub fn new(voice_name: impl Into<String>, lang: Option<&str>) -> Self {
        Self {
            voice_name: voice_name.into(),
            lang: lang.map(str::to_string),
            gender: None,
            remote: false,
            engine: VoiceEngine::Native,
            auto_select: false,
        }
    }

    /// 创建远程音色
    pub fn remote(voice_name: impl Into<String>, lang: Option<&str>, engine: VoiceEngine) -> Self {
        Self {
            remote: true,
            engine,
            ..Self::new(voice_name, lang)
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// 解析后的语言标签，未声明语言或为空串时为 None
    pub fn language_tag(&self) -> Option<LanguageTag> {
        self.lang.as_deref().filter(|l| !l.is_empty()).map(parse_lang)
    }

    pub fn is_female(&self) -> bool {
        self.gender.map_or(false, |g| g.is_female())
    }

    pub fn is_remote(&self) -> bool {
        self.remote
    }

    pub fn is_google_translate(&self) -> bool {
        self.engine == VoiceEngine::GoogleTranslate
    }

    /// 标记为自动选择的副本，原对象不变
    pub fn auto_selected(&self) -> Self {
        Self {
            auto_select: true,
            ..self.clone()
        }
    }
}
