//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 音色性别
///
/// 匹配时只区分女声与其他
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    #[serde(other)]
    Other,
}

impl Gender {
    pub fn is_female(&self) -> bool {
        matches!(self, Self::Female)
    }
}

/// 音色来源引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceEngine {
    /// 本地引擎，不需要网络
    #[default]
    Native,
    /// Google Translate 云端合成
    GoogleTranslate,
    /// 其他远程服务
    Remote,
}

impl VoiceEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::GoogleTranslate => "google_translate",
            Self::Remote => "remote",
        }
    }
}

/// 语言标签
///
/// 不变量:
/// - lang 为小写的主语言子标签
/// - rest 只在原始标签含有分隔符时存在
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag {
    pub lang: String,
    pub rest: Option<String>,
}

impl LanguageTag {
    pub fn is_english(&self) -> bool {
        self.lang == "en"
    }

    /// 是否为指定方言（已小写）
    pub fn has_dialect(&self, dialect: &str) -> bool {
        self.rest.as_deref() == Some(dialect)
    }

    /// 未声明方言（"en" 或 "en-"）
    pub fn has_no_dialect(&self) -> bool {
        self.rest.as_deref().map_or(true, str::is_empty)
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rest {
            Some(rest) => write!(f, "{}-{}", self.lang, rest),
            None => write!(f, "{}", self.lang),
        }
    }
}

/// 解析语言标签
///
/// 小写化，`_` 替换为 `-`，按第一个 `-` 切成最多两段。
/// 不校验子标签合法性，第二个 `-` 之后的内容会被丢弃。
/// 旧语言代码到当前代码的映射
pub const LANG_ALIASES: &[(&str, &str)] = &[("iw", "he")];

pub fn parse_lang(tag: &str) -> LanguageTag {
    let normalized = tag.to_lowercase().replace('_', "-");
    let mut tokens = normalized.split('-');

    let lang = tokens.next().unwrap_or_default();
    let lang = LANG_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lang)
        .map_or(lang, |(_, canonical)| canonical)
        .to_string();
    let rest = tokens.next().map(str::to_string);

    LanguageTag { lang, rest }
}
